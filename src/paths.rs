//! Centralized path definitions for quire
//!
//! Single source of truth for the on-disk names quire looks for and the
//! logical paths it hands out.
//!
//! ## Site Layout
//!
//! ```text
//! site/
//! ├── quire.toml                # Optional site configuration
//! ├── _posts/                   # Published posts -> /posts/<slug>
//! │   └── 2014-08-26-slick-tx.md
//! └── _drafts/                  # Drafts          -> /drafts/<slug>
//!     └── oauth2.html
//! ```

use std::path::{Path, PathBuf};

/// Site configuration filename
pub const CONFIG_FILE: &str = "quire.toml";

/// Default directory holding published posts
pub const DEFAULT_POSTS_DIR: &str = "_posts";

/// Default directory holding drafts
pub const DEFAULT_DRAFTS_DIR: &str = "_drafts";

/// Logical collection name for posts
pub const POSTS_COLLECTION: &str = "posts";

/// Logical collection name for drafts
pub const DRAFTS_COLLECTION: &str = "drafts";

/// Path of the configuration file for a site root
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Build the logical path of a document: `/<collection>/<slug>`
///
/// `slug` may contain `/` when the file sits in a subdirectory of the
/// collection.
#[must_use]
pub fn logical_path(collection: &str, slug: &str) -> String {
    format!("/{collection}/{}", slug.trim_matches('/'))
}
