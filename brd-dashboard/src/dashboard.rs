//! The mounted dashboard: one surface per view plus the named handlers
//! that browser events are routed to.

use crate::error::DashboardError;
use crate::surface::ChartSurface;
use crate::views::{self, ViewKind};
use brd_data::{heatmap_view, Dataset, HeatmapSelection};
use std::rc::Rc;

pub struct Dashboard<S> {
    context: Rc<Dataset>,
    views: Vec<(ViewKind, S)>,
    selection: HeatmapSelection,
}

impl<S: ChartSurface> Dashboard<S> {
    /// Bind a surface to every view. Any missing container aborts the mount.
    pub fn mount<F>(context: Rc<Dataset>, mut mount_view: F) -> Result<Self, DashboardError>
    where
        F: FnMut(ViewKind) -> Result<S, DashboardError>,
    {
        let views = ViewKind::ALL
            .iter()
            .map(|&kind| mount_view(kind).map(|surface| (kind, surface)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            context,
            views,
            selection: HeatmapSelection::default(),
        })
    }

    pub fn context(&self) -> &Rc<Dataset> {
        &self.context
    }

    pub fn selection(&self) -> HeatmapSelection {
        self.selection
    }

    pub fn surface(&self, kind: ViewKind) -> Option<&S> {
        self.views.iter().find(|(k, _)| *k == kind).map(|(_, s)| s)
    }

    /// Draw every view from the context.
    pub fn render_all(&mut self) -> Result<(), DashboardError> {
        for (kind, surface) in self.views.iter_mut() {
            let option = views::build_option(*kind, &self.context, self.selection);
            surface.set_option(&option)?;
            log::debug!("Rendered {}", kind);
        }
        Ok(())
    }

    /// Single resize fan-out for all views.
    pub fn on_resize(&mut self) {
        for (_, surface) in self.views.iter_mut() {
            surface.resize();
        }
    }

    /// Year-selector change. Axis labels, colour domain and data go out in a
    /// single `set_option`; an unknown value leaves the chart untouched.
    pub fn on_year_selected(&mut self, value: &str) -> Result<HeatmapSelection, DashboardError> {
        let selection: HeatmapSelection = value.parse().map_err(DashboardError::Selection)?;
        let view = heatmap_view(&self.context.districts, selection);
        let patch = views::heatmap_patch(&view);

        let surface = self
            .views
            .iter_mut()
            .find(|(kind, _)| *kind == ViewKind::Heatmap)
            .map(|(_, surface)| surface)
            .ok_or_else(|| DashboardError::MissingElement(ViewKind::Heatmap.container_id().to_string()))?;
        surface.set_option(&patch)?;

        log::info!("Heatmap switched from {} to {}", self.selection, selection);
        self.selection = selection;
        Ok(selection)
    }
}
