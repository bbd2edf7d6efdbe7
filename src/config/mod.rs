//! Configuration module

mod site;

pub use site::{HeadScript, NavLink, SidebarGroup, SiteConfig};
