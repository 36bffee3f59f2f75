//! Site directory record source
//!
//! Walks the posts and drafts directories of a Jekyll-style site and turns
//! every document file into a [`RawRecord`].
//!
//! # Examples
//!
//! ```no_run
//! use quire::adapters::site::SiteSource;
//! use quire::core::services::load_from;
//!
//! let source = SiteSource::open("my-blog").unwrap();
//! let report = load_from(&source).unwrap();
//! for doc in report.repository.sorted_by_date(true) {
//!     println!("{} {}", doc.path, doc.title);
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use walkdir::WalkDir;

use crate::config::{ContentConfig, SiteConfig};
use crate::core::models::RawRecord;
use crate::core::ports::RecordSource;
use crate::paths;

use super::{SourceError, frontmatter};

static DATED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})-(.+)$").expect("dated file name pattern is valid")
});

/// Everything a scan produced: the records read and the files that failed
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Records in load order
    pub records: Vec<RawRecord>,

    /// Files that could not be turned into records
    pub failures: Vec<SourceError>,
}

/// Record source backed by a site directory
#[derive(Debug, Clone)]
pub struct SiteSource {
    /// Site root directory
    root: PathBuf,

    /// Content discovery settings
    config: ContentConfig,
}

impl SiteSource {
    /// Create a source for a site root with explicit settings
    pub fn new(root: impl Into<PathBuf>, config: ContentConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Create a source for a site root, reading its `quire.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but is invalid.
    pub fn open(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let root = root.as_ref();
        let config = SiteConfig::load(root)?;
        Ok(Self::new(root, config.content))
    }

    /// Site root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Content settings in effect
    #[must_use]
    pub const fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Read every document file
    ///
    /// Posts come first, then drafts; within a collection files are in
    /// file-name order. A file that cannot be read or parsed is recorded
    /// in [`ScanResult::failures`] and the scan moves on.
    ///
    /// # Errors
    ///
    /// Returns an error if the site root does not exist.
    pub fn scan(&self) -> Result<ScanResult, SourceError> {
        if !self.root.is_dir() {
            return Err(SourceError::RootNotFound(self.root.clone()));
        }

        let mut result = ScanResult::default();
        self.scan_collection(&self.config.posts_dir, paths::POSTS_COLLECTION, &mut result);
        if self.config.include_drafts {
            self.scan_collection(&self.config.drafts_dir, paths::DRAFTS_COLLECTION, &mut result);
        }

        debug!(
            "Scanned {}: {} record(s), {} failure(s)",
            self.root.display(),
            result.records.len(),
            result.failures.len()
        );
        Ok(result)
    }

    fn scan_collection(&self, dir: &str, collection: &str, result: &mut ScanResult) {
        let base = self.root.join(dir);
        if !base.is_dir() {
            debug!("No {collection} directory at {}", base.display());
            return;
        }

        let walker = WalkDir::new(&base).follow_links(true).sort_by_file_name();
        for entry in walker.into_iter().filter_entry(|e| e.path() == base || !is_hidden(e)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    result.failures.push(SourceError::from(err));
                    continue;
                },
            };
            if !entry.file_type().is_file() || !self.is_document(entry.path()) {
                continue;
            }

            let relative = entry.path().strip_prefix(&base).unwrap_or_else(|_| entry.path());
            match read_record(entry.path(), relative, collection) {
                Ok(record) => result.records.push(record),
                Err(err) => result.failures.push(err),
            }
        }
    }

    fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.config.accepts_extension(e))
    }
}

impl RecordSource for SiteSource {
    fn records(&self) -> anyhow::Result<Vec<RawRecord>> {
        let scan = self.scan()?;
        for failure in &scan.failures {
            warn!("Skipped file: {failure}");
        }
        Ok(scan.records)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Read one file into a record
fn read_record(path: &Path, relative: &Path, collection: &str) -> Result<RawRecord, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (mut metadata, body) = frontmatter::read(path, &content)?;

    let (slug, name_date) = slug_and_date(relative);
    if metadata.date.is_none() {
        metadata.date = name_date;
    }

    Ok(RawRecord::new(paths::logical_path(collection, &slug), metadata, body))
}

/// Derive the slug of a file relative to its collection directory
///
/// The extension is dropped and a leading `YYYY-MM-DD-` on the file name is
/// split off and returned as the date.
fn slug_and_date(relative: &Path) -> (String, Option<String>) {
    let stem = relative.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();

    let (name, date) = match DATED_NAME.captures(&stem) {
        Some(caps) => (caps[2].to_string(), Some(caps[1].to_string())),
        None => (stem, None),
    };

    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    segments.push(name);

    (segments.join("/"), date)
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
