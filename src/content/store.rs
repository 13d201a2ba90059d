//! Content store - the listing and detail operations over the posts directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::{FrontMatter, MarkdownRenderer, Post, RenderedPost};
use crate::config::ContentConfig;
use crate::error::{Error, Result};

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Reads and renders content files from a flat posts directory
///
/// Every call re-reads the file system; there is no cache and no shared
/// mutable state, so concurrent calls are safe.
pub struct ContentStore {
    config: ContentConfig,
    renderer: MarkdownRenderer,
}

impl ContentStore {
    /// Create a store over a validated configuration
    pub fn new(config: ContentConfig) -> Result<Self> {
        config.validate()?;
        let renderer = MarkdownRenderer::with_options(&config.highlight, config.sanitize);
        Ok(Self { config, renderer })
    }

    /// List metadata for every content file
    ///
    /// Order is directory enumeration order, which is stable for an
    /// unchanged directory but not sorted; callers wanting recency order
    /// sort by date themselves (see [`ContentStore::list_recent`]).
    pub fn list_all(&self) -> Result<Vec<Post>> {
        let dir = &self.config.content_dir;
        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut posts = Vec::new();
        let mut seen = HashSet::new();

        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(&path) {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !seen.insert(slug.to_string()) {
                // Slugs must be unique; a .md/.markdown pair would collide
                tracing::warn!("duplicate slug '{}', skipping {:?}", slug, path);
                continue;
            }
            match self.load_meta(&path, slug) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("failed to load {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("listed {} posts from {:?}", posts.len(), dir);
        Ok(posts)
    }

    /// List the `n` most recent posts, newest first
    ///
    /// Posts whose date does not parse sort last.
    pub fn list_recent(&self, n: usize) -> Result<Vec<Post>> {
        let mut posts = self.list_all()?;
        posts.sort_by_key(|p| std::cmp::Reverse(p.parse_date()));
        posts.truncate(n);
        Ok(posts)
    }

    /// Read, parse and render one post by slug
    pub fn get_by_slug(&self, slug: &str) -> Result<RenderedPost> {
        let path = self.resolve(slug)?;
        let raw = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound {
                    slug: slug.to_string(),
                }
            } else {
                Error::io(&path, e)
            }
        })?;

        let (fm, body) = FrontMatter::parse(&raw);
        let post = Post::from_front_matter(slug, fm, &self.config.base_url);
        let content_html = self.renderer.render(body);

        Ok(RenderedPost { post, content_html })
    }

    /// Resolve a slug back to its content file
    fn resolve(&self, slug: &str) -> Result<PathBuf> {
        for ext in MARKDOWN_EXTENSIONS {
            let path = self.config.content_dir.join(format!("{}.{}", slug, ext));
            if path.is_file() {
                return Ok(path);
            }
        }
        Err(Error::NotFound {
            slug: slug.to_string(),
        })
    }

    /// Parse one file's front-matter into listing metadata
    fn load_meta(&self, path: &Path, slug: &str) -> Result<Post> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let (fm, _body) = FrontMatter::parse(&raw);
        Ok(Post::from_front_matter(slug, fm, &self.config.base_url))
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| MARKDOWN_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}
