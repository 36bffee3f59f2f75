//! Archive command - published documents by year

use std::path::Path;

use quire::output::{ArchiveResult, OutputMode};

use super::load_site;

/// Show published documents grouped by year, newest first
pub fn archive(root: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let repo = load_site(root)?;
    ArchiveResult::from(repo.archive()).render(mode);
    Ok(())
}
