//! Shared helper functions

mod date;
mod url;

pub use date::relative_date;
pub use url::url_for;
