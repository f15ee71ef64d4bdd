//! Rainfall-day data model and chart series transforms.
//!
//! This crate owns everything between the two static JSON documents and the
//! chart-ready shapes the dashboard draws:
//! - `models`: typed `DistrictYearRecord`, `SummaryStats` and the immutable `Dataset` context
//! - `series`: ranked-bar, yearly-trend and top-5 district-trend series
//! - `heatmap`: the district x year grid and its year-selector re-transforms
//! - `checks`: upstream invariant report used by the CLI (never by the dashboard)
//! - `format`: Indian digit grouping and rainfall categories
//!
//! # Usage
//!
//! ```rust
//! use brd_data::{heatmap_series, ranked_bar_series, Dataset};
//!
//! let rainfall = r#"[{"district": "Patna", "rainy_days_2021": 80, "rainy_days_2022": 70,
//!     "rainy_days_2023": 75, "rainy_days_2024": 90, "rainy_days_2025": 85,
//!     "total_rainy_days": 400}]"#;
//! let summary = r#"{"total_districts": 1, "avg_rainy_days_overall": 400.0,
//!     "max_rainfall_district": {"district": "Patna", "value": 400},
//!     "min_rainfall_district": {"district": "Patna", "value": 400},
//!     "top_10_districts": [], "yearly_totals": {"2021": 80}}"#;
//!
//! let dataset = Dataset::from_documents(rainfall, summary).unwrap();
//! let grid = heatmap_series(&dataset.districts);
//! assert_eq!(grid.cells.len(), 5);
//! assert!(ranked_bar_series(&dataset.summary).values.is_empty());
//! ```

pub mod checks;
pub mod error;
pub mod format;
pub mod heatmap;
pub mod models;
pub mod series;
pub mod years;

pub use error::{Document, Error, Result};
pub use heatmap::{heatmap_series, heatmap_view, ColorDomain, HeatCell, HeatmapSelection, HeatmapView};
pub use models::{Dataset, DistrictRef, DistrictYearRecord, SummaryStats, YearlyTotals};
pub use series::{
    district_trend_series, ranked_bar_series, yearly_trend_series, DistrictTrendLine,
    DistrictTrendSeries, RankedBarSeries, TrendSeries,
};
pub use years::{Year, YEARS};
