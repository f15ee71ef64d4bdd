//! `summary`: the dashboard's headline numbers as plain text.

use crate::{source, Sources};
use brd_dashboard::stats::stat_texts;
use brd_data::format::{group_indian, RainfallCategory};
use brd_data::Dataset;

pub fn summary_lines(dataset: &Dataset) -> Vec<String> {
    let summary = &dataset.summary;
    let mut lines = Vec::new();

    for stat in stat_texts(summary) {
        let mut line = format!("{:<16} {}", stat.target.element_id(), stat.text);
        if let Some(detail) = stat.detail {
            line.push_str(&format!(" ({detail})"));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("Top districts:".to_string());
    for (rank, record) in summary.ranked() {
        let (total, category) = match record.total_rainy_days {
            Some(days) => (
                group_indian(u64::from(days)),
                RainfallCategory::from_days(days).to_string(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        lines.push(format!("{rank:>3}. {:<20} {total:>6}  {category}", record.district));
    }

    lines.push(String::new());
    lines.push("Yearly totals:".to_string());
    for (year, total) in summary.yearly_totals.iter() {
        let total = total.map(group_indian).unwrap_or_else(|| "-".to_string());
        lines.push(format!("  {year}  {total:>8}"));
    }

    lines
}

pub async fn run_summary(sources: &Sources) -> anyhow::Result<()> {
    let dataset = source::load_dataset(sources).await?;
    for line in summary_lines(&dataset) {
        println!("{}", line);
    }
    Ok(())
}
