//! Content module - documents, front-matter, and the article/note loaders

pub mod document;
mod frontmatter;
mod item;
pub mod loader;
mod markdown;

pub use document::Document;
pub use frontmatter::FrontMatter;
pub use item::{Article, Note};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
