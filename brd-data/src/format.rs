//! Display helpers shared by the dashboard and the CLI.

use std::fmt;

/// Group digits the Indian way: last three, then pairs (`12,34,567`).
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Five-year rainy-day bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainfallCategory {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl RainfallCategory {
    pub fn from_days(days: u32) -> Self {
        match days {
            400.. => RainfallCategory::VeryHigh,
            350..=399 => RainfallCategory::High,
            300..=349 => RainfallCategory::Moderate,
            _ => RainfallCategory::Low,
        }
    }

    /// Label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            RainfallCategory::VeryHigh => "अत्यधिक",
            RainfallCategory::High => "उच्च",
            RainfallCategory::Moderate => "मध्यम",
            RainfallCategory::Low => "कम",
        }
    }
}

impl fmt::Display for RainfallCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
