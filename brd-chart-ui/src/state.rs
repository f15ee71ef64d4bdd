//! Application state managed via Dioxus context.
//!
//! `DashboardState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<DashboardState>()`.

use crate::surface::DashboardHandle;
use brd_data::{Dataset, HeatmapSelection};
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared state for the rainfall dashboard.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Immutable loaded context (None until both documents arrive)
    pub dataset: Signal<Option<Rc<Dataset>>>,
    /// Mounted chart views (None until startup succeeds)
    pub dashboard: Signal<Option<DashboardHandle>>,
    /// Whether the initial load is still in flight
    pub loading: Signal<bool>,
    /// The single startup diagnostic, or a later handler error
    pub error_msg: Signal<Option<String>>,
    /// What the heatmap currently shows
    pub selection: Signal<HeatmapSelection>,
}

impl DashboardState {
    /// Create a new DashboardState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(HeatmapSelection::default()),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
