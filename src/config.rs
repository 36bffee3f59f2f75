//! Site configuration
//!
//! Read from `quire.toml` at the site root. Every key is optional; a site
//! without the file uses the defaults.
//!
//! ```toml
//! [content]
//! posts_dir = "_posts"
//! drafts_dir = "_drafts"
//! extensions = ["md", "markdown", "html"]
//! include_drafts = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors reading the site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has wrongly typed keys
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Site-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Where content lives and which files count
    #[serde(default)]
    pub content: ContentConfig,
}

/// Content discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory of published posts, relative to the site root
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    /// Directory of drafts, relative to the site root
    #[serde(default = "default_drafts_dir")]
    pub drafts_dir: String,

    /// File extensions treated as documents (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether drafts are read at all
    #[serde(default = "default_include_drafts")]
    pub include_drafts: bool,
}

fn default_posts_dir() -> String {
    paths::DEFAULT_POSTS_DIR.to_string()
}

fn default_drafts_dir() -> String {
    paths::DEFAULT_DRAFTS_DIR.to_string()
}

fn default_extensions() -> Vec<String> {
    ["md", "markdown", "html"].into_iter().map(String::from).collect()
}

const fn default_include_drafts() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            drafts_dir: default_drafts_dir(),
            extensions: default_extensions(),
            include_drafts: default_include_drafts(),
        }
    }
}

impl ContentConfig {
    /// Whether a file extension is one of the configured document types
    #[must_use]
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

impl SiteConfig {
    /// Load `quire.toml` from a site root, or the defaults if it is absent
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(root);
        if !path.exists() {
            log::debug!("No {} in {}, using defaults", paths::CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}
