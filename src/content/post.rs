//! Post models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::frontmatter::{parse_date_string, FrontMatter};

/// Metadata for one content file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier, the source file name minus its extension
    pub slug: String,

    /// Post title; falls back to the slug when the front-matter has none
    pub title: String,

    /// Date string exactly as written in the front-matter
    pub date: String,

    /// Listing summary, if the front-matter provides one
    pub excerpt: Option<String>,

    /// Full URL for the post
    pub permalink: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Build a post from parsed front-matter
    pub fn from_front_matter(slug: &str, fm: FrontMatter, base_url: &str) -> Self {
        let title = fm.title.unwrap_or_else(|| slug.to_string());
        let date = fm.date.unwrap_or_default();
        let permalink = format!("{}/{}", base_url.trim_end_matches('/'), slug);

        Self {
            slug: slug.to_string(),
            title,
            date,
            excerpt: fm.excerpt,
            permalink,
            extra: fm.extra,
        }
    }

    /// Best-effort parse of the date string, for recency sorting
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        parse_date_string(&self.date)
    }
}

/// A post together with its rendered HTML body
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPost {
    #[serde(flatten)]
    pub post: Post,

    /// Sanitized HTML, safe to inject into a page without further escaping
    pub content_html: String,
}
