//! Business logic services
//!
//! Pure logic over domain models. Services take records in and hand back
//! validated, queryable collections; they never touch the filesystem.
//!
//! - [`loader`] - Validate records and build a repository
//! - [`repository`] - Read-only queries over loaded documents

pub mod loader;
pub mod repository;

pub use loader::{LoadError, LoadReport, RepositoryBuilder, load, load_from, parse_date};
pub use repository::{ContentRepository, TermCount, YearGroup};
