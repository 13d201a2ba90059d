//! Front-matter parsing

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter metadata from a content file
///
/// Only `title`, `date` and `excerpt` are interpreted; any other field is
/// carried through untouched in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,

    /// Additional custom fields, passed through as-is
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a file's text into front-matter and body.
    ///
    /// Accepts YAML front-matter fenced by `---` and JSON front-matter
    /// fenced by `;;;` (or a leading JSON object). Malformed front-matter is
    /// not an error: the block is logged and treated as body text, so a bad
    /// header degrades to default metadata instead of failing the file.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start();

        if trimmed.starts_with("---") {
            return Self::parse_yaml(trimmed);
        }
        if trimmed.starts_with(";;;") || trimmed.starts_with('{') {
            return Self::parse_json(trimmed);
        }

        (FrontMatter::default(), trimmed)
    }

    fn parse_yaml(content: &str) -> (Self, &str) {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence: the --- was a thematic break, not a header
            return (FrontMatter::default(), content);
        };

        let yaml = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        // A --- pair can also delimit prose in the body. Only treat the block
        // as front-matter if at least one line looks like `key: value`.
        if !has_yaml_structure(yaml) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!("malformed YAML front-matter, treating as content: {}", e);
                (FrontMatter::default(), content)
            }
        }
    }

    fn parse_json(content: &str) -> (Self, &str) {
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let body = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
                return match serde_json::from_str::<FrontMatter>(&rest[..end_pos]) {
                    Ok(fm) => (fm, body),
                    Err(e) => {
                        tracing::warn!("malformed JSON front-matter: {}", e);
                        (FrontMatter::default(), content)
                    }
                };
            }
            return (FrontMatter::default(), content);
        }

        // Bare JSON object at the start of the file
        let mut depth = 0usize;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let body = content[i + 1..].trim_start_matches(['\n', '\r']);
                        return match serde_json::from_str::<FrontMatter>(&content[..i + 1]) {
                            Ok(fm) => (fm, body),
                            Err(e) => {
                                tracing::warn!("malformed JSON front-matter: {}", e);
                                (FrontMatter::default(), content)
                            }
                        };
                    }
                }
                _ => {}
            }
        }

        (FrontMatter::default(), content)
    }

    /// Best-effort parse of the `date` field for recency sorting
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

fn has_yaml_structure(yaml: &str) -> bool {
    yaml.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        // Keys are plain identifiers; a colon inside a URL does not count
        let is_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        is_key && {
            let value = &trimmed[colon_pos + 1..];
            value.is_empty() || value.starts_with(' ')
        }
    })
}

/// Parse a date string in the common blog formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}
