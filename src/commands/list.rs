//! List command - filtered document listings

use std::path::Path;

use quire::core::models::Document;
use quire::output::{ListResult, OutputMode};

use super::load_site;
use crate::cli::ListArgs;

/// List documents matching every given filter
pub fn list(root: &Path, args: &ListArgs, mode: OutputMode) -> anyhow::Result<()> {
    let repo = load_site(root)?;

    let ordered: Vec<&Document> = if args.by_date {
        repo.sorted_by_date(!args.ascending)
    } else {
        repo.iter().collect()
    };

    let matches = ordered.into_iter().filter(|doc| {
        args.status.is_none_or(|s| doc.status == s)
            && args.tag.as_deref().is_none_or(|t| doc.has_tag(t))
            && args.category.as_deref().is_none_or(|c| doc.in_category(c))
            && args.author.as_deref().is_none_or(|a| doc.author.as_deref() == Some(a))
    });

    ListResult::from_documents(matches).render(mode);
    Ok(())
}
