//! Render a single post

use anyhow::Result;

use crate::content::ContentStore;

/// Render one post by slug and print its HTML
pub fn run(store: &ContentStore, slug: &str) -> Result<()> {
    let rendered = store.get_by_slug(slug)?;

    eprintln!("{}", rendered.post.title);
    if !rendered.post.date.is_empty() {
        eprintln!("{}", rendered.post.date);
    }
    println!("{}", rendered.content_html);

    Ok(())
}
