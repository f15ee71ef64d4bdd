//! The seam between the view registry and a real charting library.

use crate::error::DashboardError;
use serde_json::Value;

/// One rendering surface bound to one chart container.
pub trait ChartSurface {
    /// Apply an option object. Later calls merge into earlier ones, so a
    /// partial option updates only the keys it carries.
    fn set_option(&mut self, option: &Value) -> Result<(), DashboardError>;

    /// Re-lay-out after the container's viewport size changed.
    fn resize(&mut self);
}
