//! Typed views of the two static documents.
//!
//! Both documents are parsed once at startup and never mutated afterwards.
//! `Dataset` bundles them into the context handed to every transform.

use crate::error::{Document, Error, Result};
use crate::years::{Year, YEARS, YEAR_COUNT};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

/// Rainy-day counts for one district across the fixed year set.
///
/// A count that is absent from the document (or `null`) stays `None`;
/// it is never replaced by zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDistrictRecord")]
pub struct DistrictYearRecord {
    /// District name; the join key between the two documents.
    pub district: String,
    rainy_days: [Option<u32>; YEAR_COUNT],
    /// Upstream five-year total (not revalidated here).
    pub total_rainy_days: Option<u32>,
    /// Upstream five-year average, when the generator emitted one.
    pub avg_rainy_days: Option<f64>,
}

/// Wire shape: fixed keys plus one `rainy_days_<year>` key per year.
#[derive(Deserialize)]
struct RawDistrictRecord {
    district: String,
    total_rainy_days: Option<u32>,
    avg_rainy_days: Option<f64>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl TryFrom<RawDistrictRecord> for DistrictYearRecord {
    type Error = String;

    fn try_from(raw: RawDistrictRecord) -> std::result::Result<Self, Self::Error> {
        let mut rainy_days = [None; YEAR_COUNT];
        for year in YEARS {
            let key = year.field_name();
            rainy_days[year.index()] = match raw.rest.get(&key) {
                None | Some(Value::Null) => None,
                Some(value) => Some(
                    value
                        .as_u64()
                        .and_then(|n| u32::try_from(n).ok())
                        .ok_or_else(|| {
                            format!(
                                "district {:?}: {} must be a non-negative integer, got {}",
                                raw.district, key, value
                            )
                        })?,
                ),
            };
        }
        Ok(Self {
            district: raw.district,
            rainy_days,
            total_rainy_days: raw.total_rainy_days,
            avg_rainy_days: raw.avg_rainy_days,
        })
    }
}

impl DistrictYearRecord {
    /// Build a record from per-year counts ordered like `YEARS`.
    pub fn new(
        district: impl Into<String>,
        rainy_days: [Option<u32>; YEAR_COUNT],
        total_rainy_days: Option<u32>,
    ) -> Self {
        Self {
            district: district.into(),
            rainy_days,
            total_rainy_days,
            avg_rainy_days: None,
        }
    }

    pub fn rainy_days(&self, year: Year) -> Option<u32> {
        self.rainy_days[year.index()]
    }

    /// `(year, count)` pairs in chronological order.
    pub fn yearly(&self) -> impl Iterator<Item = (Year, Option<u32>)> + '_ {
        YEARS.iter().map(move |&year| (year, self.rainy_days(year)))
    }

    /// Sum of the per-year counts, or `None` if any year is missing.
    /// Widened to `u64` so five `u32` counts cannot overflow.
    pub fn per_year_sum(&self) -> Option<u64> {
        self.rainy_days
            .iter()
            .try_fold(0u64, |acc, v| v.map(|n| acc + u64::from(n)))
    }
}

/// A district named by the summary (max/min rainfall) together with its figure.
///
/// Accepts both `{district, value}` and a full district record, where
/// `total_rainy_days` stands in for `value`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistrictRef {
    pub district: String,
    #[serde(alias = "total_rainy_days")]
    pub value: Option<f64>,
}

/// Year label to all-district total, in the order the document lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearlyTotals(Vec<(String, Option<u64>)>);

impl YearlyTotals {
    pub fn new(entries: Vec<(String, Option<u64>)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<u64>)> {
        self.0.iter().map(|(label, value)| (label.as_str(), *value))
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn values(&self) -> Vec<Option<u64>> {
        self.0.iter().map(|(_, value)| *value).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the keys are exactly the fixed year set in chronological order.
    pub fn is_chronological(&self) -> bool {
        self.0.len() == YEARS.len()
            && self
                .0
                .iter()
                .zip(YEARS.iter())
                .all(|((label, _), year)| Year::from_label(label) == Some(*year))
    }
}

// serde_json's default map sorts keys; the visitor keeps document order.
impl<'de> Deserialize<'de> for YearlyTotals {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TotalsVisitor;

        impl<'de> Visitor<'de> for TotalsVisitor {
            type Value = YearlyTotals;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of year labels to rainy-day totals")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(YEAR_COUNT));
                while let Some((label, value)) = map.next_entry::<String, Option<u64>>()? {
                    if entries.iter().any(|(seen, _): &(String, _)| *seen == label) {
                        return Err(de::Error::custom(format!("duplicate year {label}")));
                    }
                    entries.push((label, value));
                }
                Ok(YearlyTotals(entries))
            }
        }

        deserializer.deserialize_map(TotalsVisitor)
    }
}

/// Summary statistics computed upstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryStats {
    pub total_districts: u32,
    pub avg_rainy_days_overall: f64,
    pub max_rainfall_district: DistrictRef,
    pub min_rainfall_district: DistrictRef,
    /// Ranked descending by total; rank is implied by position.
    pub top_10_districts: Vec<DistrictYearRecord>,
    pub yearly_totals: YearlyTotals,
}

impl SummaryStats {
    /// `(rank, record)` pairs where rank 1 is the rainiest district.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &DistrictYearRecord)> {
        self.top_10_districts
            .iter()
            .enumerate()
            .map(|(i, record)| (i + 1, record))
    }
}

/// Immutable context built from both documents and shared by every transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub districts: Vec<DistrictYearRecord>,
    pub summary: SummaryStats,
}

impl Dataset {
    pub fn new(districts: Vec<DistrictYearRecord>, summary: SummaryStats) -> Self {
        Self { districts, summary }
    }

    /// Parse both document bodies. Fails on the first document that does not parse.
    pub fn from_documents(rainfall_json: &str, summary_json: &str) -> Result<Self> {
        let districts: Vec<DistrictYearRecord> =
            serde_json::from_str(rainfall_json).map_err(|source| Error::Json {
                document: Document::Rainfall,
                source,
            })?;
        let summary: SummaryStats =
            serde_json::from_str(summary_json).map_err(|source| Error::Json {
                document: Document::Summary,
                source,
            })?;

        log::info!(
            "Loaded {} districts, {} ranked, {} yearly totals",
            districts.len(),
            summary.top_10_districts.len(),
            summary.yearly_totals.len()
        );
        if !summary.yearly_totals.is_chronological() {
            log::warn!(
                "Yearly totals keys {:?} are not the chronological year set",
                summary.yearly_totals.labels()
            );
        }

        Ok(Self::new(districts, summary))
    }

    /// District names in document order; the heatmap's row labels.
    pub fn district_names(&self) -> Vec<&str> {
        self.districts.iter().map(|d| d.district.as_str()).collect()
    }

    pub fn district(&self, name: &str) -> Option<&DistrictYearRecord> {
        self.districts.iter().find(|d| d.district == name)
    }
}
