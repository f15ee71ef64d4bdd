//! The closed, chronologically ordered set of years covered by the data.

use std::fmt;

/// A calendar year covered by the rainfall documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

/// Number of years in the fixed year set.
pub const YEAR_COUNT: usize = 5;

/// Every year the documents carry, in chronological order.
pub const YEARS: [Year; YEAR_COUNT] = [Year(2021), Year(2022), Year(2023), Year(2024), Year(2025)];

impl Year {
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Look up a year of the fixed set by its numeric value.
    pub fn new(year: u16) -> Option<Self> {
        YEARS.iter().copied().find(|y| y.0 == year)
    }

    /// Parse an axis or document label such as `"2023"`.
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse::<u16>().ok().and_then(Self::new)
    }

    /// Position of this year within `YEARS`.
    pub fn index(self) -> usize {
        (self.0 - YEARS[0].0) as usize
    }

    /// Key of the per-year count inside a district record, e.g. `rainy_days_2021`.
    pub fn field_name(self) -> String {
        format!("rainy_days_{}", self.0)
    }

    pub fn label(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis labels for the full year set.
pub fn year_labels() -> Vec<String> {
    YEARS.iter().map(|y| y.label()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_are_chronological() {
        assert!(YEARS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(year_labels(), vec!["2021", "2022", "2023", "2024", "2025"]);
    }

    #[test]
    fn index_matches_position() {
        for (i, year) in YEARS.iter().enumerate() {
            assert_eq!(year.index(), i);
        }
    }

    #[test]
    fn from_label_rejects_years_outside_the_set() {
        assert_eq!(Year::from_label("2023"), Some(YEARS[2]));
        assert_eq!(Year::from_label(" 2025 "), Some(YEARS[4]));
        assert_eq!(Year::from_label("2020"), None);
        assert_eq!(Year::from_label("total"), None);
    }

    #[test]
    fn field_name_matches_document_keys() {
        assert_eq!(YEARS[0].field_name(), "rainy_days_2021");
    }
}
