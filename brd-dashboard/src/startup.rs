//! Fail-fast startup: load, mount, first render.
//!
//! Either every chart is drawn from a complete context or the sequence
//! stops at the first failure with exactly one diagnostic.

use crate::dashboard::Dashboard;
use crate::error::DashboardError;
use crate::surface::ChartSurface;
use crate::views::ViewKind;
use brd_data::Dataset;
use std::rc::Rc;

/// Where startup failures are reported.
pub trait Diagnostics {
    fn report(&mut self, error: &DashboardError);
}

/// Logs through the `log` facade.
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, error: &DashboardError) {
        log::error!("Dashboard startup failed: {error}");
    }
}

pub fn startup<S, F>(
    loaded: Result<Dataset, brd_data::Error>,
    mount_view: F,
    diagnostics: &mut dyn Diagnostics,
) -> Option<Dashboard<S>>
where
    S: ChartSurface,
    F: FnMut(ViewKind) -> Result<S, DashboardError>,
{
    let sequence = loaded
        .map_err(DashboardError::Load)
        .and_then(|dataset| Dashboard::mount(Rc::new(dataset), mount_view))
        .and_then(|mut dashboard| dashboard.render_all().map(|()| dashboard));

    match sequence {
        Ok(dashboard) => {
            log::info!("Dashboard ready with {} views", ViewKind::ALL.len());
            Some(dashboard)
        }
        Err(error) => {
            diagnostics.report(&error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dataset, set_options, CallLog, RecordingSurface};

    #[derive(Default)]
    struct Collected(Vec<String>);

    impl Diagnostics for Collected {
        fn report(&mut self, error: &DashboardError) {
            self.0.push(error.to_string());
        }
    }

    #[test]
    fn failed_fetch_reports_once_and_renders_nothing() {
        let log = CallLog::default();
        let mut mounts = 0;
        let mut inner = RecordingSurface::mounter(&log);
        let mut diagnostics = Collected::default();

        let loaded = Err(brd_data::Error::Status { url: "summary_stats.json".into(), status: 404 });
        let result = startup(
            loaded,
            |kind| {
                mounts += 1;
                inner(kind)
            },
            &mut diagnostics,
        );

        assert!(result.is_none());
        assert_eq!(mounts, 0);
        assert!(log.borrow().is_empty());
        assert_eq!(diagnostics.0.len(), 1);
        assert!(diagnostics.0[0].contains("summary_stats.json"));
    }

    #[test]
    fn parse_failure_is_fatal_too() {
        let log = CallLog::default();
        let mut diagnostics = Collected::default();
        let loaded = Dataset::from_documents("[]", "{oops");
        let result = startup(loaded, RecordingSurface::mounter(&log), &mut diagnostics);
        assert!(result.is_none());
        assert!(log.borrow().is_empty());
        assert_eq!(diagnostics.0.len(), 1);
    }

    #[test]
    fn missing_container_reports_once_without_partial_render() {
        let log = CallLog::default();
        let mut inner = RecordingSurface::mounter(&log);
        let mut diagnostics = Collected::default();
        let result = startup(
            Ok(dataset()),
            |kind| match kind {
                ViewKind::DistrictTrend => Err(DashboardError::MissingElement(kind.container_id().into())),
                _ => inner(kind),
            },
            &mut diagnostics,
        );
        assert!(result.is_none());
        assert!(set_options(&log).is_empty());
        assert_eq!(diagnostics.0, vec!["Element #district-trend-chart not found".to_string()]);
    }

    #[test]
    fn successful_startup_renders_every_view() {
        let log = CallLog::default();
        let mut diagnostics = Collected::default();
        let dashboard = startup(Ok(dataset()), RecordingSurface::mounter(&log), &mut diagnostics);
        assert!(dashboard.is_some());
        assert!(diagnostics.0.is_empty());
        assert_eq!(set_options(&log).len(), ViewKind::ALL.len());
    }
}
