/// Error types for mounting and driving the dashboard views
use crate::views::ViewKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// Either document failed to load; nothing is drawn
    #[error("Failed to load dashboard data: {0}")]
    Load(#[source] brd_data::Error),

    /// The year selector produced a value no view understands
    #[error("Cannot apply year selection: {0}")]
    Selection(#[source] brd_data::Error),

    /// A container or stat target is missing from the page
    #[error("Element #{0} not found")]
    MissingElement(String),

    /// The charting library rejected an option
    #[error("Failed to render {view}: {reason}")]
    Render { view: ViewKind, reason: String },
}
