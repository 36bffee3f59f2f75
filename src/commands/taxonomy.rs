//! Tags and categories commands

use std::path::Path;

use quire::output::{OutputMode, TaxonomyResult};

use super::load_site;

/// List every tag with its document count
pub fn tags(root: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let repo = load_site(root)?;
    TaxonomyResult {
        kind: "tags".to_string(),
        terms: repo.tags(),
    }
    .render(mode);
    Ok(())
}

/// List every category with its document count
pub fn categories(root: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let repo = load_site(root)?;
    TaxonomyResult {
        kind: "categories".to_string(),
        terms: repo.categories(),
    }
    .render(mode);
    Ok(())
}
