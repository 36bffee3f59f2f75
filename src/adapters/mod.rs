//! Adapter implementations for port traits
//!
//! This module contains concrete record sources:
//!
//! - `site/` - Jekyll-style site directory (`_posts/`, `_drafts/`)
//! - `memory` - Records held in memory

pub mod memory;
pub mod site;

pub use memory::MemorySource;
pub use site::{SiteSource, SourceError};
