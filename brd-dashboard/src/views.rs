//! ECharts option builders for the four chart views.
//!
//! Options are plain JSON. Gradients use ECharts' object form
//! (`{"type": "linear", ...}`) instead of `echarts.graphic.LinearGradient`,
//! and the one tooltip that needs code names a formatter registered by the
//! JS bridge (`"@heatmapCell"`).

use brd_data::{
    district_trend_series, heatmap_view, ranked_bar_series, yearly_trend_series, Dataset,
    DistrictTrendSeries, HeatmapSelection, HeatmapView, RankedBarSeries, TrendSeries,
};
use serde_json::{json, Value};
use std::fmt;

/// Series name used on the heatmap.
pub const RAINY_DAYS: &str = "वर्षा दिवस";
/// Series name used on the total charts.
pub const TOTAL_RAINY_DAYS: &str = "कुल वर्षा दिवस";
/// Value-axis label template.
pub const DAYS_AXIS_LABEL: &str = "{value} दिन";

const HEATMAP_RAMP: [&str; 3] = ["#e8f0f391", "#3b3dc7bb", "#f50404ff"];
const TREND_LINE_COLOR: &str = "#1e4d4b";

/// The four chart views, each bound to a fixed container id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Heatmap,
    Top10,
    YearlyTrend,
    DistrictTrend,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Heatmap,
        ViewKind::Top10,
        ViewKind::YearlyTrend,
        ViewKind::DistrictTrend,
    ];

    pub fn container_id(self) -> &'static str {
        match self {
            ViewKind::Heatmap => "heatmap-chart",
            ViewKind::Top10 => "top10-chart",
            ViewKind::YearlyTrend => "yearly-trend-chart",
            ViewKind::DistrictTrend => "district-trend-chart",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_id())
    }
}

/// Full option for a view, built from the context and the heatmap selection.
pub fn build_option(kind: ViewKind, dataset: &Dataset, selection: HeatmapSelection) -> Value {
    match kind {
        ViewKind::Heatmap => heatmap_option(&heatmap_view(&dataset.districts, selection)),
        ViewKind::Top10 => ranked_bar_option(&ranked_bar_series(&dataset.summary)),
        ViewKind::YearlyTrend => yearly_trend_option(&yearly_trend_series(&dataset.summary)),
        ViewKind::DistrictTrend => district_trend_option(&district_trend_series(&dataset.summary)),
    }
}

pub fn heatmap_option(view: &HeatmapView) -> Value {
    json!({
        "tooltip": { "position": "top", "formatter": "@heatmapCell" },
        "grid": { "height": "70%", "top": "10%" },
        "xAxis": {
            "type": "category",
            "data": view.x_labels,
            "splitArea": { "show": true },
            "axisLabel": { "fontSize": 12 }
        },
        "yAxis": {
            "type": "category",
            "data": view.y_labels,
            "splitArea": { "show": true },
            "axisLabel": { "fontSize": 10 }
        },
        "visualMap": {
            "min": view.color_domain.min,
            "max": view.color_domain.max,
            "calculable": true,
            "orient": "horizontal",
            "left": "center",
            "bottom": "5%",
            "inRange": { "color": HEATMAP_RAMP }
        },
        "series": [{
            "name": RAINY_DAYS,
            "type": "heatmap",
            "data": view.cells,
            "label": { "show": false },
            "emphasis": {
                "itemStyle": { "shadowBlur": 10, "shadowColor": "rgba(0, 0, 0, 0.5)" }
            }
        }]
    })
}

/// Year-selector update: axis labels, colour bounds and data in one option.
pub fn heatmap_patch(view: &HeatmapView) -> Value {
    json!({
        "xAxis": { "data": view.x_labels },
        "visualMap": { "min": view.color_domain.min, "max": view.color_domain.max },
        "series": [{ "data": view.cells }]
    })
}

fn linear_gradient(x2: u8, y2: u8, stops: [(f64, &str); 2]) -> Value {
    json!({
        "type": "linear",
        "x": 0, "y": 0, "x2": x2, "y2": y2,
        "colorStops": stops
            .iter()
            .map(|(offset, color)| json!({ "offset": offset, "color": color }))
            .collect::<Vec<_>>()
    })
}

pub fn ranked_bar_option(series: &RankedBarSeries) -> Value {
    json!({
        "tooltip": {
            "trigger": "axis",
            "axisPointer": { "type": "shadow" },
            "formatter": format!("{{b0}}<br/>{TOTAL_RAINY_DAYS}: {{c0}}")
        },
        "grid": { "left": "3%", "right": "4%", "bottom": "3%", "containLabel": true },
        "xAxis": { "type": "value", "axisLabel": { "formatter": DAYS_AXIS_LABEL } },
        "yAxis": {
            "type": "category",
            "data": series.districts,
            "axisLabel": { "fontSize": 11 }
        },
        "series": [{
            "name": TOTAL_RAINY_DAYS,
            "type": "bar",
            "data": series.values,
            "itemStyle": { "color": linear_gradient(1, 0, [(0.0, "#4a90a4"), (1.0, "#1e4d4b")]) },
            "emphasis": {
                "itemStyle": { "color": linear_gradient(1, 0, [(0.0, "#5ba3b8"), (1.0, "#2e5d5b")]) }
            },
            "label": { "show": true, "position": "right", "formatter": "{c} दिन", "fontSize": 11 }
        }]
    })
}

pub fn yearly_trend_option(series: &TrendSeries) -> Value {
    json!({
        "tooltip": {
            "trigger": "axis",
            "formatter": format!("{{b0}}<br/>{TOTAL_RAINY_DAYS}: {{c0}}")
        },
        "grid": { "left": "3%", "right": "4%", "bottom": "3%", "containLabel": true },
        "xAxis": { "type": "category", "data": series.labels, "boundaryGap": false },
        "yAxis": { "type": "value", "axisLabel": { "formatter": DAYS_AXIS_LABEL } },
        "series": [{
            "name": TOTAL_RAINY_DAYS,
            "type": "line",
            "data": series.values,
            "smooth": true,
            "itemStyle": { "color": TREND_LINE_COLOR },
            "areaStyle": {
                "color": linear_gradient(0, 1, [
                    (0.0, "rgba(30, 77, 75, 0.3)"),
                    (1.0, "rgba(30, 77, 75, 0.1)"),
                ])
            },
            "lineStyle": { "width": 3 },
            "symbol": "circle",
            "symbolSize": 8,
            "label": { "show": true, "position": "top", "formatter": "{c}", "fontSize": 11 }
        }]
    })
}

pub fn district_trend_option(series: &DistrictTrendSeries) -> Value {
    let lines: Vec<Value> = series
        .lines
        .iter()
        .map(|line| {
            json!({
                "name": line.name,
                "type": "line",
                "data": line.values(),
                "smooth": true,
                "itemStyle": { "color": line.color },
                "lineStyle": { "width": 2 },
                "symbol": "circle",
                "symbolSize": 6
            })
        })
        .collect();

    json!({
        "tooltip": { "trigger": "axis" },
        "legend": { "data": series.names(), "bottom": 0, "textStyle": { "fontSize": 11 } },
        "grid": { "left": "3%", "right": "4%", "bottom": "15%", "containLabel": true },
        "xAxis": { "type": "category", "data": series.years, "boundaryGap": false },
        "yAxis": { "type": "value", "axisLabel": { "formatter": DAYS_AXIS_LABEL } },
        "series": lines
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dataset;
    use brd_data::heatmap_series;

    #[test]
    fn container_ids_are_distinct() {
        let mut ids: Vec<_> = ViewKind::ALL.iter().map(|k| k.container_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn heatmap_option_carries_labels_domain_and_cells() {
        let data = dataset();
        let option = heatmap_option(&heatmap_series(&data.districts));
        assert_eq!(option["yAxis"]["data"], json!(["Patna", "Gaya", "Nalanda"]));
        assert_eq!(option["xAxis"]["data"][0], "2021");
        assert_eq!(option["visualMap"]["min"], 30);
        assert_eq!(option["visualMap"]["max"], 180);
        assert_eq!(option["series"][0]["data"][0], json!([0, 0, 80]));
        assert_eq!(option["tooltip"]["formatter"], "@heatmapCell");
    }

    #[test]
    fn ranked_bar_option_keeps_rank_order() {
        let data = dataset();
        let option = build_option(ViewKind::Top10, &data, HeatmapSelection::AllYears);
        assert_eq!(option["yAxis"]["data"], json!(["Patna", "Gaya", "Nalanda"]));
        assert_eq!(option["series"][0]["data"], json!([410, 360, 290]));
        assert_eq!(option["series"][0]["itemStyle"]["color"]["type"], "linear");
    }

    #[test]
    fn yearly_trend_option_uses_document_key_order() {
        let data = dataset();
        let option = build_option(ViewKind::YearlyTrend, &data, HeatmapSelection::AllYears);
        assert_eq!(option["xAxis"]["data"], json!(["2021", "2022", "2023", "2024", "2025"]));
        assert_eq!(option["series"][0]["data"][0], 210);
    }

    #[test]
    fn district_trend_option_has_one_series_per_ranked_district() {
        let data = dataset();
        let option = build_option(ViewKind::DistrictTrend, &data, HeatmapSelection::AllYears);
        let series = option["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(option["legend"]["data"], json!(["Patna", "Gaya", "Nalanda"]));
        for line in series {
            assert_eq!(line["data"].as_array().unwrap().len(), 5);
        }
        assert_eq!(series[0]["itemStyle"]["color"], "#1e4d4b");
    }

    #[test]
    fn heatmap_patch_holds_only_the_three_changing_parts() {
        let data = dataset();
        let view = heatmap_view(&data.districts, HeatmapSelection::Total);
        let patch = heatmap_patch(&view);
        let keys: Vec<_> = patch.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(patch["xAxis"]["data"], json!(["कुल (2021-2025)"]));
        assert_eq!(patch["visualMap"], json!({ "min": 250, "max": 550 }));
        assert_eq!(patch["series"][0]["data"], json!([[0, 0, 410], [0, 1, 360], [0, 2, 290]]));
    }
}
