//! Text for the four headline stat cards.

use brd_data::format::{group_indian, RainfallCategory};
use brd_data::{DistrictRef, SummaryStats};

/// A stat display target on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTarget {
    TotalDistricts,
    AverageRainfall,
    MaxDistrict,
    MinDistrict,
}

impl StatTarget {
    pub const ALL: [StatTarget; 4] = [
        StatTarget::TotalDistricts,
        StatTarget::AverageRainfall,
        StatTarget::MaxDistrict,
        StatTarget::MinDistrict,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            StatTarget::TotalDistricts => "total-districts",
            StatTarget::AverageRainfall => "avg-rainfall",
            StatTarget::MaxDistrict => "max-district",
            StatTarget::MinDistrict => "min-district",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            StatTarget::TotalDistricts => "कुल जिले",
            StatTarget::AverageRainfall => "औसत वर्षा दिवस (5 वर्ष)",
            StatTarget::MaxDistrict => "सर्वाधिक वर्षा",
            StatTarget::MinDistrict => "न्यूनतम वर्षा",
        }
    }
}

/// Rendered content of one stat card.
#[derive(Debug, Clone, PartialEq)]
pub struct StatText {
    pub target: StatTarget,
    /// The headline value written into the target element.
    pub text: String,
    /// Secondary line, e.g. the district's total and category.
    pub detail: Option<String>,
}

fn district_detail(reference: &DistrictRef) -> Option<String> {
    let value = reference.value?;
    let days = value.round() as u32;
    Some(format!(
        "{} दिन · {}",
        group_indian(u64::from(days)),
        RainfallCategory::from_days(days)
    ))
}

pub fn stat_texts(summary: &SummaryStats) -> Vec<StatText> {
    StatTarget::ALL
        .iter()
        .map(|&target| {
            let (text, detail) = match target {
                StatTarget::TotalDistricts => (group_indian(u64::from(summary.total_districts)), None),
                StatTarget::AverageRainfall => (summary.avg_rainy_days_overall.to_string(), None),
                StatTarget::MaxDistrict => (
                    summary.max_rainfall_district.district.clone(),
                    district_detail(&summary.max_rainfall_district),
                ),
                StatTarget::MinDistrict => (
                    summary.min_rainfall_district.district.clone(),
                    district_detail(&summary.min_rainfall_district),
                ),
            };
            StatText { target, text, detail }
        })
        .collect()
}
