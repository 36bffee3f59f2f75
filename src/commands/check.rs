//! Check command - validate every document of a site

use std::path::Path;

use quire::adapters::SiteSource;
use quire::core::ports::RecordSource;
use quire::core::services::load;
use quire::output::{CheckReport, OutputMode, Rejection};

/// Load the whole site and report every rejected file or record
///
/// Exits with status 1 when anything was rejected.
pub fn check(root: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let source = SiteSource::open(root)?;
    let scan = source.scan()?;

    let mut rejected: Vec<Rejection> = scan.failures.iter().map(Rejection::from).collect();
    let report = load(scan.records);
    rejected.extend(report.errors.iter().map(Rejection::from));

    let result = CheckReport {
        passed: rejected.is_empty(),
        source: source.describe(),
        loaded: report.repository.len(),
        rejected,
    };

    result.render(mode);

    if !result.passed {
        std::process::exit(1);
    }

    Ok(())
}
