//! List posts

use anyhow::Result;

use crate::content::ContentStore;

/// Print post metadata, one line per post
///
/// With `recent`, posts are sorted newest first and truncated; otherwise
/// they print in directory enumeration order.
pub fn run(store: &ContentStore, recent: Option<usize>) -> Result<()> {
    let posts = match recent {
        Some(n) => store.list_recent(n)?,
        None => store.list_all()?,
    };

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!("  {} - {} [{}]", post.date, post.title, post.slug);
    }

    Ok(())
}
