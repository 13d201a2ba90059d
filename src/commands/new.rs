//! Scaffold a new post

use anyhow::Result;
use std::fs;

use crate::config::ContentConfig;

/// Create `{slug}.md` in the content directory with a front-matter header
pub fn run(config: &ContentConfig, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);
    let file_path = config.content_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("file already exists: {:?}", file_path);
    }

    fs::create_dir_all(&config.content_dir)?;

    let content = format!(
        "---\ntitle: \"{}\"\ndate: \"{}\"\n---\n",
        title,
        now.format("%Y-%m-%d")
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
