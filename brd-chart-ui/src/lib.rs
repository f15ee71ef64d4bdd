//! Shared Dioxus components and ECharts bridge for the rainfall dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the ECharts glue in `assets/js/`
//! - `surface`: the ECharts-backed `ChartSurface` and the window resize hook
//! - `loader`: concurrent browser fetch of both documents
//! - `reveal`: IntersectionObserver scroll reveals and the hero entrance
//! - `state`: reactive `DashboardState` with Dioxus Signals
//! - `components`: reusable RSX components (selector, stat cards, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod reveal;
pub mod state;
pub mod surface;
