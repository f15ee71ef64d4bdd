//! Chart views, view registry and event handlers for the rainfall dashboard.
//!
//! Nothing here touches the DOM. Rendering goes through the [`ChartSurface`]
//! trait so every handler can run against a recording fake in tests, while
//! `brd-chart-ui` supplies the ECharts-backed implementation in the browser.
//!
//! - `views`: ECharts option builders for the four charts
//! - `dashboard`: the mounted view registry and its named handlers
//! - `startup`: the fail-fast load, mount and first-render sequence
//! - `stats`, `navigation`, `reveal`: stat cards, anchor links, entrance animations

pub mod dashboard;
pub mod error;
pub mod navigation;
pub mod reveal;
pub mod startup;
pub mod stats;
pub mod surface;
pub mod views;

pub use dashboard::Dashboard;
pub use error::DashboardError;
pub use startup::{startup, Diagnostics};
pub use surface::ChartSurface;
pub use views::ViewKind;

#[cfg(test)]
pub(crate) mod testing;
