//! Bihar District Rainfall Dashboard (2021-2025)
//!
//! Single-page view of rainy-day counts per district, drawn with ECharts.
//!
//! Data flow:
//! 1. On mount: play the hero entrance and fetch `rainfall_data.json` and
//!    `summary_stats.json` concurrently.
//! 2. `brd_dashboard::startup` mounts the four chart views and renders them
//!    from the loaded context, or reports exactly one diagnostic.
//! 3. After a successful start: one window resize hook for all charts and
//!    the scroll reveal observer.
//! 4. The year selector patches the heatmap through the dashboard handle.

use brd_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, Hero, LoadingSpinner, NavLink, StatCards,
    YearSelector,
};
use brd_chart_ui::loader::load_dataset;
use brd_chart_ui::reveal::{observe_reveals, play_hero_entrance};
use brd_chart_ui::state::DashboardState;
use brd_chart_ui::surface::{install_resize_listener, EchartsSurface};
use brd_dashboard::reveal::RevealTracker;
use brd_dashboard::{startup, DashboardError, Diagnostics, ViewKind};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// District-by-year records, served next to the bundle.
const RAINFALL_DATA_URL: &str = "rainfall_data.json";
/// Precomputed aggregates for the same districts.
const SUMMARY_STATS_URL: &str = "summary_stats.json";

const ROOT_ELEMENT: &str = "rainfall-dashboard-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ELEMENT))
        .launch(App);
}

/// Logs the startup failure and shows it on the page.
struct PageDiagnostics {
    error_msg: Signal<Option<String>>,
}

impl Diagnostics for PageDiagnostics {
    fn report(&mut self, error: &DashboardError) {
        log::error!("Dashboard startup failed: {}", error);
        self.error_msg.set(Some(error.to_string()));
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(DashboardState::new);

    // ─── Startup: runs once on mount ───
    use_effect(move || {
        play_hero_entrance();

        spawn(async move {
            let loaded = load_dataset(RAINFALL_DATA_URL, SUMMARY_STATS_URL).await;
            let mut diagnostics = PageDiagnostics {
                error_msg: state.error_msg,
            };

            if let Some(dashboard) = startup(loaded, EchartsSurface::mount, &mut diagnostics) {
                state.dataset.set(Some(Rc::clone(dashboard.context())));
                let handle = Rc::new(RefCell::new(dashboard));
                install_resize_listener(Rc::clone(&handle));
                state.dashboard.set(Some(handle));
                observe_reveals(Rc::new(RefCell::new(RevealTracker::new())));
            }
            state.loading.set(false);
        });
    });

    let loading = *state.loading.read();
    let fatal = !loading && state.dashboard.read().is_none();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 0 8px 24px 8px; font-family: system-ui, -apple-system, 'Noto Sans Devanagari', sans-serif; background: #f7f9f9;",

            Hero {
                title: "बिहार जिलेवार वर्षा डैशबोर्ड".to_string(),
                subtitle: "2021 से 2025 तक प्रत्येक जिले के वर्षा दिवसों का विश्लेषण".to_string(),
                NavLink { href: "#overview".to_string(), label: "सारांश देखें".to_string(), primary: true }
                NavLink { href: "#heatmap".to_string(), label: "हीटमैप".to_string(), primary: true }
            }

            nav {
                style: "display: flex; flex-wrap: wrap; justify-content: center; margin: 8px 0; border-bottom: 1px solid #e0e0e0;",
                NavLink { href: "#overview".to_string(), label: "सारांश".to_string() }
                NavLink { href: "#heatmap".to_string(), label: "हीटमैप".to_string() }
                NavLink { href: "#top10".to_string(), label: "शीर्ष 10".to_string() }
                NavLink { href: "#yearly-trend".to_string(), label: "वार्षिक रुझान".to_string() }
                NavLink { href: "#district-trend".to_string(), label: "जिला रुझान".to_string() }
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone(), fatal }
            }

            if loading {
                LoadingSpinner {}
            }

            ChartHeader {
                anchor: "overview".to_string(),
                title: "सारांश".to_string(),
            }
            StatCards {}

            ChartHeader {
                anchor: "heatmap".to_string(),
                title: "जिलेवार वर्षा दिवस हीटमैप".to_string(),
                caption: "प्रत्येक जिले और वर्ष के लिए वर्षा दिवसों की संख्या".to_string(),
            }
            YearSelector {}
            ChartContainer { view: ViewKind::Heatmap, loading, height: 900 }

            ChartHeader {
                anchor: "top10".to_string(),
                title: "शीर्ष 10 जिले".to_string(),
                caption: "कुल वर्षा दिवसों (2021-2025) के आधार पर".to_string(),
            }
            ChartContainer { view: ViewKind::Top10, loading }

            ChartHeader {
                anchor: "yearly-trend".to_string(),
                title: "वार्षिक कुल वर्षा दिवस".to_string(),
                caption: "सभी जिलों का योग".to_string(),
            }
            ChartContainer { view: ViewKind::YearlyTrend, loading }

            ChartHeader {
                anchor: "district-trend".to_string(),
                title: "शीर्ष 5 जिलों का रुझान".to_string(),
            }
            ChartContainer { view: ViewKind::DistrictTrend, loading }
        }
    }
}
