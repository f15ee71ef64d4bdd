//! Chart-ready series for the ranked bar, yearly trend and district trend charts.

use crate::models::SummaryStats;
use crate::years::{year_labels, YEARS};
use serde::Serialize;

/// Number of bars in the ranked chart.
pub const TOP_BAR_COUNT: usize = 10;

/// Number of districts drawn on the multi-district trend chart.
pub const TREND_DISTRICT_COUNT: usize = 5;

/// Line colours by slot; slot 0 is the rainiest district.
pub const TREND_PALETTE: [&str; TREND_DISTRICT_COUNT] =
    ["#1e4d4b", "#4a90a4", "#8b6f47", "#5ba3b8", "#a0845c"];

/// District names and totals in rank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBarSeries {
    pub districts: Vec<String>,
    pub values: Vec<Option<u32>>,
}

/// Category labels and one value per label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<u64>>,
}

/// One district's line on the multi-district trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictTrendLine {
    pub name: String,
    pub color: &'static str,
    /// `(year label, count)` for every year of the fixed set.
    pub points: Vec<(String, Option<u32>)>,
}

impl DistrictTrendLine {
    pub fn values(&self) -> Vec<Option<u32>> {
        self.points.iter().map(|(_, value)| *value).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictTrendSeries {
    pub years: Vec<String>,
    pub lines: Vec<DistrictTrendLine>,
}

impl DistrictTrendSeries {
    pub fn names(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.name.clone()).collect()
    }
}

/// Top districts by total, in the order the summary ranks them.
pub fn ranked_bar_series(summary: &SummaryStats) -> RankedBarSeries {
    let top = summary.top_10_districts.iter().take(TOP_BAR_COUNT);
    let (districts, values) = top
        .map(|record| (record.district.clone(), record.total_rainy_days))
        .unzip();
    RankedBarSeries { districts, values }
}

/// All-district totals per year, keys kept in document order.
pub fn yearly_trend_series(summary: &SummaryStats) -> TrendSeries {
    TrendSeries {
        labels: summary.yearly_totals.labels(),
        values: summary.yearly_totals.values(),
    }
}

/// One line per top-5 district; colours follow the slot, not the district.
pub fn district_trend_series(summary: &SummaryStats) -> DistrictTrendSeries {
    let lines = summary
        .top_10_districts
        .iter()
        .take(TREND_DISTRICT_COUNT)
        .zip(TREND_PALETTE)
        .map(|(record, color)| DistrictTrendLine {
            name: record.district.clone(),
            color,
            points: YEARS
                .iter()
                .map(|&year| (year.label(), record.rainy_days(year)))
                .collect(),
        })
        .collect();

    DistrictTrendSeries {
        years: year_labels(),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DistrictRef, DistrictYearRecord, YearlyTotals};

    fn record(name: &str, total: u32) -> DistrictYearRecord {
        let per_year = total / 5;
        DistrictYearRecord::new(name, [Some(per_year); 5], Some(total))
    }

    fn summary(top: Vec<DistrictYearRecord>, totals: Vec<(&str, u64)>) -> SummaryStats {
        SummaryStats {
            total_districts: top.len() as u32,
            avg_rainy_days_overall: 0.0,
            max_rainfall_district: DistrictRef { district: "a".into(), value: None },
            min_rainfall_district: DistrictRef { district: "b".into(), value: None },
            top_10_districts: top,
            yearly_totals: YearlyTotals::new(
                totals.into_iter().map(|(k, v)| (k.to_string(), Some(v))).collect(),
            ),
        }
    }

    #[test]
    fn ranked_bars_follow_summary_order() {
        let stats = summary(
            vec![record("Patna", 410), record("Gaya", 360), record("Nalanda", 290)],
            vec![],
        );
        let bars = ranked_bar_series(&stats);
        assert_eq!(bars.districts, vec!["Patna", "Gaya", "Nalanda"]);
        assert_eq!(bars.values, vec![Some(410), Some(360), Some(290)]);
    }

    #[test]
    fn ranked_bars_are_capped_and_non_increasing() {
        let top: Vec<_> = (0..12).map(|i| record(&format!("D{i}"), 500 - i * 10)).collect();
        let bars = ranked_bar_series(&summary(top, vec![]));
        assert_eq!(bars.values.len(), TOP_BAR_COUNT);
        assert!(bars.values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn yearly_trend_preserves_key_order() {
        let stats = summary(vec![], vec![("2021", 1000), ("2022", 1100)]);
        let trend = yearly_trend_series(&stats);
        assert_eq!(trend.labels, vec!["2021", "2022"]);
        assert_eq!(trend.values, vec![Some(1000), Some(1100)]);
    }

    #[test]
    fn district_trend_takes_at_most_five_with_one_point_per_year() {
        let top: Vec<_> = (0..7).map(|i| record(&format!("D{i}"), 400 - i * 10)).collect();
        let trend = district_trend_series(&summary(top, vec![]));
        assert_eq!(trend.lines.len(), TREND_DISTRICT_COUNT);
        for (slot, line) in trend.lines.iter().enumerate() {
            assert_eq!(line.points.len(), YEARS.len());
            assert_eq!(line.color, TREND_PALETTE[slot]);
        }
        assert_eq!(trend.years, vec!["2021", "2022", "2023", "2024", "2025"]);
    }

    #[test]
    fn district_trend_colours_follow_slot_not_district() {
        let first = district_trend_series(&summary(vec![record("Patna", 410), record("Gaya", 360)], vec![]));
        let swapped = district_trend_series(&summary(vec![record("Gaya", 360), record("Patna", 410)], vec![]));
        assert_eq!(first.lines[0].name, "Patna");
        assert_eq!(swapped.lines[0].name, "Gaya");
        assert_eq!(first.lines[0].color, swapped.lines[0].color);
    }

    #[test]
    fn three_ranked_districts_give_three_lines_and_bars() {
        let stats = summary(
            vec![record("Patna", 410), record("Gaya", 360), record("Nalanda", 290)],
            vec![],
        );
        assert_eq!(ranked_bar_series(&stats).values, vec![Some(410), Some(360), Some(290)]);
        assert_eq!(district_trend_series(&stats).names(), vec!["Patna", "Gaya", "Nalanda"]);
    }
}
