//! Pipeline configuration (postpress.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Content pipeline configuration
///
/// Constructed explicitly and passed into [`crate::content::ContentStore`];
/// there is no module-level singleton. Validation happens up front in
/// [`ContentConfig::validate`] rather than lazily inside each call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Flat directory of `{slug}.md` content files
    pub content_dir: PathBuf,

    /// Site base URL, used to build post permalinks
    pub base_url: String,

    /// Syntax highlighting options
    pub highlight: HighlightConfig,

    /// Escape raw HTML found in markdown bodies
    ///
    /// Post bodies are author-controlled, so a deployment may turn this off
    /// to allow inline HTML. Rendered output is injected unescaped
    /// downstream, so the renderer is the only sanitization boundary.
    pub sanitize: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("posts"),
            base_url: "http://localhost:4000".to_string(),
            highlight: HighlightConfig::default(),
            sanitize: true,
        }
    }
}

impl ContentConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: ContentConfig =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(config)
    }

    /// Validate the configuration before any content is served
    pub fn validate(&self) -> Result<()> {
        if !self.content_dir.is_dir() {
            return Err(Error::Config(format!(
                "content_dir {:?} is not a directory",
                self.content_dir
            )));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base_url '{}' must be an http(s) URL",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Syntax highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Syntect theme name
    pub theme: String,
    /// Render a line-number gutter next to code blocks
    pub line_numbers: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }
}
