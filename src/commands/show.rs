//! Show command - a single document in full

use std::path::Path;

use quire::output::{DocumentDetail, OutputMode};

use super::load_site;

/// Show metadata, excerpt and code samples of one document
pub fn show(root: &Path, path: &str, mode: OutputMode) -> anyhow::Result<()> {
    let repo = load_site(root)?;

    let Some(doc) = repo.get(path) else {
        anyhow::bail!("Document not found: {path}");
    };

    DocumentDetail::from(doc).render(mode);
    Ok(())
}
