//! postpress: a markdown content pipeline for file-backed blogs
//!
//! Reads a flat directory of `{slug}.md` files, parses their front-matter
//! metadata, and renders markdown bodies to sanitized HTML with syntax
//! highlighting. The file system is the single source of truth: every call
//! re-reads and re-parses, nothing is cached.
//!
//! ```no_run
//! use postpress::config::ContentConfig;
//! use postpress::content::ContentStore;
//!
//! # fn main() -> postpress::Result<()> {
//! let store = ContentStore::new(ContentConfig::default())?;
//! for post in store.list_all()? {
//!     println!("{} {}", post.date, post.title);
//! }
//! let rendered = store.get_by_slug("hello-world")?;
//! println!("{}", rendered.content_html);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod content;
pub mod error;

pub use error::{Error, Result};
