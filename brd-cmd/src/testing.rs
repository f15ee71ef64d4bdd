//! Fixture documents for command tests.

use std::path::PathBuf;

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
    "max_rainfall_district": {"district": "Patna", "total_rainy_days": 410},
    "min_rainfall_district": {"district": "Nalanda", "total_rainy_days": 290},
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

pub fn dataset() -> brd_data::Dataset {
    brd_data::Dataset::from_documents(RAINFALL_JSON, SUMMARY_JSON).unwrap()
}

/// Write a fixture under the system temp dir and return its path.
pub fn write_fixture(name: &str, contents: &str) -> String {
    let path: PathBuf = std::env::temp_dir().join(format!("brd-cmd-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}
