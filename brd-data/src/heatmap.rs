//! District x year heatmap grid and its year-selector re-transforms.
//!
//! The chart addresses cells by position, so every view derives its axis
//! labels and its cell indices from the same column list and the same
//! district slice.

use crate::error::Error;
use crate::models::DistrictYearRecord;
use crate::years::{Year, YEARS};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Column label used for the five-year aggregate.
pub const TOTAL_LABEL: &str = "कुल (2021-2025)";

/// Colour-intensity range for single-year counts.
pub const SINGLE_YEAR_DOMAIN: ColorDomain = ColorDomain { min: 30, max: 180 };

/// Colour-intensity range for five-year sums.
pub const TOTAL_DOMAIN: ColorDomain = ColorDomain { min: 250, max: 550 };

/// What the heatmap's year selector currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeatmapSelection {
    /// One column per year (initial view)
    #[default]
    AllYears,
    /// One synthetic column with each district's five-year total
    Total,
    /// One column for a single year
    Year(Year),
}

impl HeatmapSelection {
    /// Selector option value, the inverse of `from_str`.
    pub fn value(&self) -> String {
        match self {
            HeatmapSelection::AllYears => "all".to_string(),
            HeatmapSelection::Total => "total".to_string(),
            HeatmapSelection::Year(year) => year.label(),
        }
    }

    pub fn color_domain(&self) -> ColorDomain {
        match self {
            HeatmapSelection::Total => TOTAL_DOMAIN,
            HeatmapSelection::AllYears | HeatmapSelection::Year(_) => SINGLE_YEAR_DOMAIN,
        }
    }

    fn columns(&self) -> Vec<Column> {
        match self {
            HeatmapSelection::AllYears => YEARS.iter().map(|&y| Column::Year(y)).collect(),
            HeatmapSelection::Total => vec![Column::Total],
            HeatmapSelection::Year(year) => vec![Column::Year(*year)],
        }
    }
}

impl FromStr for HeatmapSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(HeatmapSelection::AllYears),
            "total" => Ok(HeatmapSelection::Total),
            other => Year::from_label(other)
                .map(HeatmapSelection::Year)
                .ok_or_else(|| Error::Selection(s.to_string())),
        }
    }
}

impl fmt::Display for HeatmapSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Column {
    Year(Year),
    Total,
}

impl Column {
    fn label(self) -> String {
        match self {
            Column::Year(year) => year.label(),
            Column::Total => TOTAL_LABEL.to_string(),
        }
    }

    fn value(self, record: &DistrictYearRecord) -> Option<u32> {
        match self {
            Column::Year(year) => record.rainy_days(year),
            Column::Total => record.total_rainy_days,
        }
    }
}

/// Visual-map bounds for the heatmap colour ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorDomain {
    pub min: u32,
    pub max: u32,
}

/// One heatmap cell, serialized as `[x, y, value]` with `null` for a missing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatCell(pub usize, pub usize, pub Option<u32>);

impl HeatCell {
    /// Column index into `HeatmapView::x_labels`.
    pub fn x(&self) -> usize {
        self.0
    }

    /// Row index into `HeatmapView::y_labels`.
    pub fn y(&self) -> usize {
        self.1
    }

    pub fn value(&self) -> Option<u32> {
        self.2
    }
}

/// Everything the heatmap needs for one render or one selector update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapView {
    #[serde(skip)]
    pub selection: HeatmapSelection,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub color_domain: ColorDomain,
    pub cells: Vec<HeatCell>,
}

/// Build the grid for a selection, cells in district-then-column order.
pub fn heatmap_view(districts: &[DistrictYearRecord], selection: HeatmapSelection) -> HeatmapView {
    let columns = selection.columns();
    let mut cells = Vec::with_capacity(districts.len() * columns.len());
    let mut missing = 0usize;

    for (y, record) in districts.iter().enumerate() {
        for (x, column) in columns.iter().enumerate() {
            let value = column.value(record);
            if value.is_none() {
                missing += 1;
                log::warn!(
                    "No {} count for district {:?}; leaving the cell empty",
                    column.label(),
                    record.district
                );
            }
            cells.push(HeatCell(x, y, value));
        }
    }
    if missing > 0 {
        log::warn!("Heatmap ({selection}) has {missing} empty cells");
    }

    HeatmapView {
        selection,
        x_labels: columns.iter().map(|c| c.label()).collect(),
        y_labels: districts.iter().map(|d| d.district.clone()).collect(),
        color_domain: selection.color_domain(),
        cells,
    }
}

/// The initial full grid: every district against every year.
pub fn heatmap_series(districts: &[DistrictYearRecord]) -> HeatmapView {
    heatmap_view(districts, HeatmapSelection::AllYears)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn districts() -> Vec<DistrictYearRecord> {
        vec![
            DistrictYearRecord::new("Patna", [Some(80), Some(78), Some(82), Some(85), Some(85)], Some(410)),
            DistrictYearRecord::new("Gaya", [Some(70), None, Some(72), Some(75), Some(70)], Some(360)),
            DistrictYearRecord::new("Nalanda", [Some(60), Some(55), Some(58), Some(60), Some(57)], Some(290)),
        ]
    }

    #[test]
    fn full_grid_orders_cells_district_then_year() {
        let view = heatmap_series(&districts());
        assert_eq!(view.x_labels, vec!["2021", "2022", "2023", "2024", "2025"]);
        assert_eq!(view.cells.len(), 15);
        assert_eq!(view.cells[0], HeatCell(0, 0, Some(80)));
        assert_eq!(view.cells[4], HeatCell(4, 0, Some(85)));
        assert_eq!(view.cells[5], HeatCell(0, 1, Some(70)));
        assert_eq!(view.color_domain, SINGLE_YEAR_DOMAIN);
    }

    #[test]
    fn row_index_matches_label_position() {
        let records = districts();
        let view = heatmap_series(&records);
        for cell in &view.cells {
            let record = &records[cell.y()];
            assert_eq!(view.y_labels[cell.y()], record.district);
            let year = Year::from_label(&view.x_labels[cell.x()]).unwrap();
            assert_eq!(cell.value(), record.rainy_days(year));
        }
    }

    #[test]
    fn missing_count_is_passed_through_not_zeroed() {
        let view = heatmap_series(&districts());
        assert_eq!(view.cells[6], HeatCell(1, 1, None));
        let json = serde_json::to_string(&view.cells[6]).unwrap();
        assert_eq!(json, "[1,1,null]");
    }

    #[test]
    fn total_selection_uses_one_aggregate_column() {
        let view = heatmap_view(&districts(), HeatmapSelection::Total);
        assert_eq!(view.x_labels, vec![TOTAL_LABEL]);
        assert_eq!(view.color_domain, TOTAL_DOMAIN);
        assert_eq!(
            view.cells,
            vec![HeatCell(0, 0, Some(410)), HeatCell(0, 1, Some(360)), HeatCell(0, 2, Some(290))]
        );
    }

    #[test]
    fn single_year_selection_uses_one_year_column() {
        let view = heatmap_view(&districts(), "2023".parse().unwrap());
        assert_eq!(view.x_labels, vec!["2023"]);
        assert_eq!(view.color_domain, SINGLE_YEAR_DOMAIN);
        assert_eq!(view.cells.iter().map(|c| c.value()).collect::<Vec<_>>(), vec![Some(82), Some(72), Some(58)]);
        assert!(view.cells.iter().all(|c| c.x() == 0));
    }

    #[test]
    fn selection_values_round_trip() {
        for value in ["all", "total", "2021", "2025"] {
            let selection: HeatmapSelection = value.parse().unwrap();
            assert_eq!(selection.value(), value);
        }
        assert_eq!("".parse::<HeatmapSelection>().unwrap(), HeatmapSelection::AllYears);
        assert!(matches!("2019".parse::<HeatmapSelection>(), Err(Error::Selection(_))));
        assert!(matches!("monsoon".parse::<HeatmapSelection>(), Err(Error::Selection(_))));
    }
}
