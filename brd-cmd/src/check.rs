//! `check`: vet a freshly generated pair of documents before publishing.

use crate::{source, Sources};
use brd_data::checks::check_dataset;
use brd_data::Dataset;
use log::info;

/// One line per violation, numbered; empty when the pair is consistent.
pub fn check_report(dataset: &Dataset) -> Vec<String> {
    check_dataset(dataset)
        .iter()
        .enumerate()
        .map(|(i, violation)| format!("{:>3}. {}", i + 1, violation))
        .collect()
}

pub async fn run_check(sources: &Sources) -> anyhow::Result<()> {
    let dataset = source::load_dataset(sources).await?;
    let report = check_report(&dataset);

    if report.is_empty() {
        info!("No violations in {} districts", dataset.districts.len());
        println!("OK: {} districts, all invariants hold", dataset.districts.len());
        return Ok(());
    }

    for line in &report {
        println!("{}", line);
    }
    anyhow::bail!("{} invariant violation(s) found", report.len())
}
