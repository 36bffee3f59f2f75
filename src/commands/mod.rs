//! Command implementations

mod archive;
mod check;
mod list;
mod show;
mod taxonomy;

use std::path::Path;

use quire::adapters::SiteSource;
use quire::core::services::{ContentRepository, load};

pub use archive::archive;
pub use check::check;
pub use list::list;
pub use show::show;
pub use taxonomy::{categories, tags};

/// Load the repository of a site, logging rejected records and files
fn load_site(root: &Path) -> anyhow::Result<ContentRepository> {
    let source = SiteSource::open(root)?;
    let scan = source.scan()?;
    for failure in &scan.failures {
        log::warn!("Skipped file: {failure}");
    }
    Ok(load(scan.records).repository)
}
