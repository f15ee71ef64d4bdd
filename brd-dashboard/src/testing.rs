//! Fixtures shared by the unit tests.

use crate::error::DashboardError;
use crate::surface::ChartSurface;
use crate::views::ViewKind;
use brd_data::Dataset;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

pub const RAINFALL_JSON: &str = r#"[
    {"district": "Patna", "rainy_days_2021": 80, "rainy_days_2022": 78, "rainy_days_2023": 82,
     "rainy_days_2024": 85, "rainy_days_2025": 85, "total_rainy_days": 410},
    {"district": "Gaya", "rainy_days_2021": 70, "rainy_days_2022": 72, "rainy_days_2023": 73,
     "rainy_days_2024": 75, "rainy_days_2025": 70, "total_rainy_days": 360},
    {"district": "Nalanda", "rainy_days_2021": 60, "rainy_days_2022": 55, "rainy_days_2023": 58,
     "rainy_days_2024": 60, "rainy_days_2025": 57, "total_rainy_days": 290}
]"#;

pub const SUMMARY_JSON: &str = r#"{
    "total_districts": 3,
    "avg_rainy_days_overall": 353.3,
    "max_rainfall_district": {"district": "Patna", "value": 410},
    "min_rainfall_district": {"district": "Nalanda", "value": 290},
    "top_10_districts": [
        {"district": "Patna", "rainy_days_2021": 80, "rainy_days_2022": 78, "rainy_days_2023": 82,
         "rainy_days_2024": 85, "rainy_days_2025": 85, "total_rainy_days": 410},
        {"district": "Gaya", "rainy_days_2021": 70, "rainy_days_2022": 72, "rainy_days_2023": 73,
         "rainy_days_2024": 75, "rainy_days_2025": 70, "total_rainy_days": 360},
        {"district": "Nalanda", "rainy_days_2021": 60, "rainy_days_2022": 55, "rainy_days_2023": 58,
         "rainy_days_2024": 60, "rainy_days_2025": 57, "total_rainy_days": 290}
    ],
    "yearly_totals": {"2021": 210, "2022": 205, "2023": 213, "2024": 220, "2025": 212}
}"#;

pub fn dataset() -> Dataset {
    Dataset::from_documents(RAINFALL_JSON, SUMMARY_JSON).unwrap()
}

/// Every call any surface received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetOption(ViewKind, Value),
    Resize(ViewKind),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct RecordingSurface {
    pub kind: ViewKind,
    pub log: CallLog,
}

impl RecordingSurface {
    pub fn mounter(log: &CallLog) -> impl FnMut(ViewKind) -> Result<RecordingSurface, DashboardError> {
        let log = log.clone();
        move |kind| Ok(RecordingSurface { kind, log: log.clone() })
    }
}

impl ChartSurface for RecordingSurface {
    fn set_option(&mut self, option: &Value) -> Result<(), DashboardError> {
        self.log.borrow_mut().push(Call::SetOption(self.kind, option.clone()));
        Ok(())
    }

    fn resize(&mut self) {
        self.log.borrow_mut().push(Call::Resize(self.kind));
    }
}

pub fn set_options(log: &CallLog) -> Vec<(ViewKind, Value)> {
    log.borrow()
        .iter()
        .filter_map(|call| match call {
            Call::SetOption(kind, option) => Some((*kind, option.clone())),
            Call::Resize(_) => None,
        })
        .collect()
}
