//! Content module - front-matter parsing, markdown rendering, and the store

mod frontmatter;
mod markdown;
mod post;
mod store;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{Post, RenderedPost};
pub use store::ContentStore;
