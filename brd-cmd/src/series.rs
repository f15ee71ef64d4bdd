//! `series`: print what one chart would be given, as JSON.

use crate::{source, ChartArg, Sources};
use brd_dashboard::views::build_option;
use brd_dashboard::ViewKind;
use brd_data::{
    district_trend_series, heatmap_view, ranked_bar_series, yearly_trend_series, Dataset,
    HeatmapSelection,
};
use serde_json::Value;

impl From<ChartArg> for ViewKind {
    fn from(chart: ChartArg) -> Self {
        match chart {
            ChartArg::Heatmap => ViewKind::Heatmap,
            ChartArg::Top10 => ViewKind::Top10,
            ChartArg::YearlyTrend => ViewKind::YearlyTrend,
            ChartArg::DistrictTrend => ViewKind::DistrictTrend,
        }
    }
}

/// The series (or full option) for one chart. The year only affects the heatmap.
pub fn chart_json(
    dataset: &Dataset,
    chart: ChartArg,
    selection: HeatmapSelection,
    option: bool,
) -> anyhow::Result<Value> {
    if option {
        return Ok(build_option(chart.into(), dataset, selection));
    }
    let value = match chart {
        ChartArg::Heatmap => serde_json::to_value(heatmap_view(&dataset.districts, selection))?,
        ChartArg::Top10 => serde_json::to_value(ranked_bar_series(&dataset.summary))?,
        ChartArg::YearlyTrend => serde_json::to_value(yearly_trend_series(&dataset.summary))?,
        ChartArg::DistrictTrend => serde_json::to_value(district_trend_series(&dataset.summary))?,
    };
    Ok(value)
}

pub async fn run_series(
    sources: &Sources,
    chart: ChartArg,
    year: &str,
    option: bool,
) -> anyhow::Result<()> {
    let selection: HeatmapSelection = year.parse()?;
    let dataset = source::load_dataset(sources).await?;
    let value = chart_json(&dataset, chart, selection, option)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dataset;
    use serde_json::json;

    #[test]
    fn total_heatmap_is_one_column_with_wide_domain() {
        let value = chart_json(&dataset(), ChartArg::Heatmap, HeatmapSelection::Total, false).unwrap();
        assert_eq!(value["x_labels"], json!(["कुल (2021-2025)"]));
        assert_eq!(value["y_labels"], json!(["Patna", "Gaya", "Nalanda"]));
        assert_eq!(value["color_domain"], json!({"min": 250, "max": 550}));
        assert_eq!(value["cells"], json!([[0, 0, 410], [0, 1, 360], [0, 2, 290]]));
    }

    #[test]
    fn top10_series_keeps_ranking() {
        let value = chart_json(&dataset(), ChartArg::Top10, HeatmapSelection::AllYears, false).unwrap();
        assert_eq!(value["districts"], json!(["Patna", "Gaya", "Nalanda"]));
        assert_eq!(value["values"], json!([410, 360, 290]));
    }

    #[test]
    fn yearly_trend_follows_document_order() {
        let value =
            chart_json(&dataset(), ChartArg::YearlyTrend, HeatmapSelection::AllYears, false).unwrap();
        assert_eq!(value["labels"], json!(["2021", "2022", "2023", "2024", "2025"]));
        assert_eq!(value["values"], json!([210, 205, 213, 220, 212]));
    }

    #[test]
    fn option_flag_emits_full_echarts_option() {
        let value =
            chart_json(&dataset(), ChartArg::DistrictTrend, HeatmapSelection::AllYears, true).unwrap();
        let series = value["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0]["name"], "Patna");
        assert!(value.get("legend").is_some());
    }

    #[test]
    fn year_argument_is_validated() {
        assert!("2019".parse::<HeatmapSelection>().is_err());
        assert_eq!("2023".parse::<HeatmapSelection>().unwrap().value(), "2023");
    }
}
