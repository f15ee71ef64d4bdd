//! Headline stat cards filled from the summary document.

use crate::state::DashboardState;
use brd_dashboard::stats::{stat_texts, StatTarget, StatText};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    target: StatTarget,
    text: String,
    #[props(!optional)]
    detail: Option<String>,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            class: "stat-card",
            style: "flex: 1 1 180px; padding: 16px; background: #fff; border-radius: 8px; border-top: 4px solid #4a90a4; box-shadow: 0 1px 3px rgba(0,0,0,0.08);",
            div {
                style: "font-size: 13px; color: #666;",
                "{props.target.caption()}"
            }
            div {
                id: "{props.target.element_id()}",
                style: "font-size: 26px; font-weight: 600; color: #1e4d4b; margin-top: 4px;",
                "{props.text}"
            }
            if let Some(detail) = props.detail.as_ref() {
                div {
                    style: "font-size: 12px; color: #8b6f47; margin-top: 2px;",
                    "{detail}"
                }
            }
        }
    }
}

/// The four stat cards. Placeholders until the dataset arrives.
#[component]
pub fn StatCards() -> Element {
    let state = use_context::<DashboardState>();
    let texts: Vec<StatText> = match state.dataset.read().as_ref() {
        Some(dataset) => stat_texts(&dataset.summary),
        None => StatTarget::ALL
            .iter()
            .map(|&target| StatText {
                target,
                text: "--".to_string(),
                detail: None,
            })
            .collect(),
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 16px 0;",
            for stat in texts {
                StatCard {
                    key: "{stat.target.element_id()}",
                    target: stat.target,
                    text: stat.text,
                    detail: stat.detail,
                }
            }
        }
    }
}
