//! Key Stage 4 headline measures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::availability::Availability;

/// The fixed set of performance measures a peer list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Average Attainment 8 score per pupil.
    #[serde(rename = "attainment-8")]
    Attainment8,
    /// Percentage of pupils achieving grade 5 or above in English and maths.
    #[serde(rename = "english-maths-grade-5-plus")]
    EnglishMathsGrade5Plus,
    /// Percentage of pupils achieving grade 4 or above in English and maths.
    #[serde(rename = "english-maths-grade-4-plus")]
    EnglishMathsGrade4Plus,
    /// Percentage of pupils entering the English Baccalaureate.
    #[serde(rename = "ebacc-entry")]
    EbaccEntry,
    /// Percentage of pupils staying in education or entering employment.
    #[serde(rename = "staying-in-education-or-employment")]
    StayingInEducationOrEmployment,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Attainment8,
        Metric::EnglishMathsGrade5Plus,
        Metric::EnglishMathsGrade4Plus,
        Metric::EbaccEntry,
        Metric::StayingInEducationOrEmployment,
    ];

    /// Stable key used in query strings and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Attainment8 => "attainment-8",
            Metric::EnglishMathsGrade5Plus => "english-maths-grade-5-plus",
            Metric::EnglishMathsGrade4Plus => "english-maths-grade-4-plus",
            Metric::EbaccEntry => "ebacc-entry",
            Metric::StayingInEducationOrEmployment => "staying-in-education-or-employment",
        }
    }

    /// Look a metric up by its key, ignoring case and surrounding whitespace.
    pub fn from_key(key: &str) -> Option<Metric> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|metric| metric.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Measures for one school, keyed by metric.
///
/// A metric with no entry reads as `Unavailable(Missing)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceMeasures(BTreeMap<Metric, Availability<f64>>);

impl PerformanceMeasures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> Availability<f64> {
        self.0.get(&metric).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, metric: Metric, value: Availability<f64>) {
        self.0.insert(metric, value);
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, metric: Metric, value: Availability<f64>) -> Self {
        self.set(metric, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &Availability<f64>)> {
        self.0.iter().map(|(metric, value)| (*metric, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Metric, Availability<f64>)> for PerformanceMeasures {
    fn from_iter<I: IntoIterator<Item = (Metric, Availability<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::availability::UnavailableReason;

    #[test]
    fn test_metric_key_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_key(metric.key()), Some(metric));
        }
        assert_eq!(Metric::from_key(" EBACC-ENTRY "), Some(Metric::EbaccEntry));
        assert_eq!(Metric::from_key("progress-8"), None);
    }

    #[test]
    fn test_missing_metric_reads_unavailable() {
        let measures = PerformanceMeasures::new().with(Metric::EbaccEntry, Availability::Available(40.0));
        assert_eq!(measures.get(Metric::EbaccEntry), Availability::Available(40.0));
        assert_eq!(
            measures.get(Metric::Attainment8),
            Availability::Unavailable(UnavailableReason::Missing)
        );
    }

    #[test]
    fn test_serializes_as_keyed_map() {
        let measures = PerformanceMeasures::new()
            .with(Metric::Attainment8, Availability::Available(47.5))
            .with(
                Metric::EbaccEntry,
                Availability::Unavailable(UnavailableReason::Suppressed),
            );
        let json = serde_json::to_value(&measures).unwrap();
        assert_eq!(json["attainment-8"]["available"], 47.5);
        assert_eq!(json["ebacc-entry"]["unavailable"], "suppressed");
    }
}
