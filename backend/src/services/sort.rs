//! Ordering of peer lists.
//!
//! All orderings are ascending and stable: schools that compare equal keep
//! the order of the underlying collection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::models::{Metric, SimilarSchool};

/// Caller-selected ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SortKey {
    /// School name, compared by Unicode lowercase then code point.
    #[default]
    Name,
    /// A performance measure, numerically; unavailable values last.
    Metric(Metric),
}

impl SortKey {
    /// Parse a query value. Missing or unrecognised input falls back to `Name`.
    pub fn parse(raw: Option<&str>) -> SortKey {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return SortKey::Name;
        };
        if raw.eq_ignore_ascii_case("name") {
            return SortKey::Name;
        }
        Metric::from_key(raw)
            .map(SortKey::Metric)
            .unwrap_or(SortKey::Name)
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Metric(metric) => metric.key(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.key().to_string()
    }
}

impl From<String> for SortKey {
    fn from(raw: String) -> Self {
        SortKey::parse(Some(&raw))
    }
}

/// Compare two optional metric values: present values ascending, absent ones after.
fn compare_metric(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a new list ordered by `key`.
pub fn sort_schools(schools: &[SimilarSchool], key: SortKey) -> Vec<SimilarSchool> {
    let mut sorted = schools.to_vec();
    match key {
        SortKey::Name => {
            // sort_by_cached_key is stable
            sorted.sort_by_cached_key(|school| school.name.to_lowercase());
        }
        SortKey::Metric(metric) => {
            sorted.sort_by(|a, b| {
                compare_metric(
                    a.measures.get(metric).copied_value(),
                    b.measures.get(metric).copied_value(),
                )
            });
        }
    }
    sorted
}
