//! quire - A front-matter content repository for Jekyll-style blog sites
//!
//! This library models the posts and drafts of a static blog: it reads
//! documents with YAML front matter, validates their metadata and answers
//! read-only queries by status, tag, category and date.
//!
//! ```
//! use quire::core::models::{FrontMatter, RawRecord, Status};
//! use quire::core::services::ContentRepository;
//!
//! let post = RawRecord::new(
//!     "/posts/slick-tx",
//!     FrontMatter {
//!         date: Some("2014-08-26".to_string()),
//!         tags: Some(vec!["scala", "transactions"].into()),
//!         ..FrontMatter::default()
//!     },
//!     "A transaction abstraction for Slick.",
//! );
//! let report = ContentRepository::load(vec![post]);
//! assert!(report.is_clean());
//! assert_eq!(report.repository.by_status(Status::Published).count(), 1);
//! assert_eq!(report.repository.by_tag("scala").count(), 1);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
