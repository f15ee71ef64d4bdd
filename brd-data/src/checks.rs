//! Upstream invariant report.
//!
//! The dashboard trusts its inputs. These checks exist for the CLI so a
//! freshly generated pair of documents can be vetted before publishing.

use crate::models::Dataset;
use crate::years::{year_labels, Year};
use std::collections::HashSet;
use std::fmt;

/// One broken invariant between or within the two documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    DuplicateDistrict(String),
    MissingCount { district: String, year: Year },
    TotalMismatch { district: String, total: Option<u32>, sum: u64 },
    DistrictCountMismatch { declared: u32, found: usize },
    UnknownTopDistrict(String),
    DuplicateTopDistrict(String),
    TopRecordDiffers(String),
    TopNotDescending { district: String, rank: usize },
    OutrankedByUnlisted { district: String, total: u32 },
    UnknownStatDistrict { role: &'static str, district: String },
    YearlyTotalsKeys(Vec<String>),
    YearlyTotalMismatch { year: String, declared: Option<u64>, sum: u64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateDistrict(d) => write!(f, "district {d:?} appears more than once"),
            Violation::MissingCount { district, year } => {
                write!(f, "district {district:?} has no count for {year}")
            }
            Violation::TotalMismatch { district, total, sum } => write!(
                f,
                "district {district:?}: total_rainy_days {total:?} != per-year sum {sum}"
            ),
            Violation::DistrictCountMismatch { declared, found } => write!(
                f,
                "total_districts is {declared} but the rainfall data lists {found}"
            ),
            Violation::UnknownTopDistrict(d) => {
                write!(f, "top-10 district {d:?} is not in the rainfall data")
            }
            Violation::DuplicateTopDistrict(d) => write!(f, "top-10 lists {d:?} more than once"),
            Violation::TopRecordDiffers(d) => {
                write!(f, "top-10 entry for {d:?} differs from its rainfall record")
            }
            Violation::TopNotDescending { district, rank } => write!(
                f,
                "top-10 rank {rank} ({district:?}) has a larger total than the rank above it"
            ),
            Violation::OutrankedByUnlisted { district, total } => write!(
                f,
                "{district:?} ({total} days) is missing from the top-10 but beats a listed district"
            ),
            Violation::UnknownStatDistrict { role, district } => {
                write!(f, "{role} rainfall district {district:?} is not in the rainfall data")
            }
            Violation::YearlyTotalsKeys(keys) => write!(
                f,
                "yearly_totals keys {keys:?} differ from {:?}",
                year_labels()
            ),
            Violation::YearlyTotalMismatch { year, declared, sum } => write!(
                f,
                "yearly total for {year} is {declared:?} but the districts sum to {sum}"
            ),
        }
    }
}

/// Check every documented invariant; an empty result means the pair is consistent.
pub fn check_dataset(dataset: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();
    let districts = &dataset.districts;
    let summary = &dataset.summary;

    let mut seen = HashSet::new();
    for record in districts {
        if !seen.insert(record.district.as_str()) {
            violations.push(Violation::DuplicateDistrict(record.district.clone()));
        }
        for (year, count) in record.yearly() {
            if count.is_none() {
                violations.push(Violation::MissingCount {
                    district: record.district.clone(),
                    year,
                });
            }
        }
        if let Some(sum) = record.per_year_sum() {
            if record.total_rainy_days.map(u64::from) != Some(sum) {
                violations.push(Violation::TotalMismatch {
                    district: record.district.clone(),
                    total: record.total_rainy_days,
                    sum,
                });
            }
        }
    }

    if summary.total_districts as usize != districts.len() {
        violations.push(Violation::DistrictCountMismatch {
            declared: summary.total_districts,
            found: districts.len(),
        });
    }

    let mut listed = HashSet::new();
    let mut previous: Option<u32> = None;
    for (rank, entry) in summary.ranked() {
        if !listed.insert(entry.district.as_str()) {
            violations.push(Violation::DuplicateTopDistrict(entry.district.clone()));
        }
        match dataset.district(&entry.district) {
            None => violations.push(Violation::UnknownTopDistrict(entry.district.clone())),
            Some(record) if record.total_rainy_days != entry.total_rainy_days
                || record.yearly().ne(entry.yearly()) =>
            {
                violations.push(Violation::TopRecordDiffers(entry.district.clone()));
            }
            Some(_) => {}
        }
        if let (Some(prev), Some(total)) = (previous, entry.total_rainy_days) {
            if total > prev {
                violations.push(Violation::TopNotDescending {
                    district: entry.district.clone(),
                    rank,
                });
            }
        }
        previous = entry.total_rainy_days.or(previous);
    }

    let lowest_listed = summary
        .top_10_districts
        .iter()
        .filter_map(|d| d.total_rainy_days)
        .min();
    if let Some(floor) = lowest_listed {
        for record in districts {
            match record.total_rainy_days {
                Some(total) if total > floor && !listed.contains(record.district.as_str()) => {
                    violations.push(Violation::OutrankedByUnlisted {
                        district: record.district.clone(),
                        total,
                    });
                }
                _ => {}
            }
        }
    }

    for (role, reference) in [
        ("max", &summary.max_rainfall_district),
        ("min", &summary.min_rainfall_district),
    ] {
        if dataset.district(&reference.district).is_none() {
            violations.push(Violation::UnknownStatDistrict {
                role,
                district: reference.district.clone(),
            });
        }
    }

    if !summary.yearly_totals.is_chronological() {
        violations.push(Violation::YearlyTotalsKeys(summary.yearly_totals.labels()));
    }
    for (label, declared) in summary.yearly_totals.iter() {
        let Some(year) = Year::from_label(label) else {
            continue;
        };
        let sum: u64 = districts
            .iter()
            .filter_map(|d| d.rainy_days(year))
            .map(u64::from)
            .sum();
        if declared != Some(sum) {
            violations.push(Violation::YearlyTotalMismatch {
                year: label.to_string(),
                declared,
                sum,
            });
        }
    }

    violations
}
