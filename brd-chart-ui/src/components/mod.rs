//! Reusable Dioxus RSX components for the rainfall dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod hero;
mod loading_spinner;
mod nav_link;
mod stat_card;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use hero::Hero;
pub use loading_spinner::LoadingSpinner;
pub use nav_link::{scroll_to_anchor, NavLink};
pub use stat_card::StatCards;
pub use year_selector::YearSelector;
