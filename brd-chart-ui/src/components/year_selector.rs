//! Dropdown selector for the heatmap column set.

use crate::state::DashboardState;
use brd_data::heatmap::TOTAL_LABEL;
use brd_data::{HeatmapSelection, YEARS};
use dioxus::prelude::*;

const SELECTOR_ID: &str = "year-selector";

/// Every selectable option in display order: all years, the total, then each year.
fn selector_options() -> Vec<(HeatmapSelection, String)> {
    let mut options = vec![
        (HeatmapSelection::AllYears, "सभी वर्ष".to_string()),
        (HeatmapSelection::Total, TOTAL_LABEL.to_string()),
    ];
    options.extend(YEARS.iter().map(|&year| (HeatmapSelection::Year(year), year.label())));
    options
}

/// Year dropdown. Each change goes through `Dashboard::on_year_selected`,
/// which patches the heatmap in one update.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<DashboardState>();
    let selected = (state.selection)();
    let ready = state.dashboard.read().is_some();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let Some(handle) = state.dashboard.read().clone() else {
            log::debug!("Year selected before dashboard was ready: {}", value);
            return;
        };
        let outcome = handle.borrow_mut().on_year_selected(&value);
        match outcome {
            Ok(selection) => state.selection.set(selection),
            Err(e) => {
                log::warn!("Heatmap update failed: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: SELECTOR_ID,
                style: "font-weight: bold; margin-right: 8px;",
                "वर्ष: "
            }
            select {
                id: SELECTOR_ID,
                disabled: !ready,
                onchange: on_change,
                for (choice, label) in selector_options() {
                    option {
                        value: "{choice.value()}",
                        selected: choice == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn options_cover_all_total_and_each_year() {
        let values: Vec<String> = selector_options().iter().map(|(s, _)| s.value()).collect();
        assert_eq!(values, vec!["all", "total", "2021", "2022", "2023", "2024", "2025"]);
    }

    #[test]
    fn option_values_parse_back() {
        for (selection, _) in selector_options() {
            assert_eq!(HeatmapSelection::from_str(&selection.value()).ok(), Some(selection));
        }
    }
}
