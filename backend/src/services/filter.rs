//! Peer-group filtering by region, urban/rural classification and local authority.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Availability, SimilarSchool};

/// A filterable attribute of a peer school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Region,
    UrbanRural,
    LocalAuthority,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Region,
        FilterDimension::UrbanRural,
        FilterDimension::LocalAuthority,
    ];

    /// Query-string key for this dimension.
    pub fn key(&self) -> &'static str {
        match self {
            FilterDimension::Region => "region",
            FilterDimension::UrbanRural => "urban_rural",
            FilterDimension::LocalAuthority => "local_authority",
        }
    }

    pub fn from_key(key: &str) -> Option<FilterDimension> {
        Self::ALL.into_iter().find(|d| d.key() == key.trim())
    }

    pub fn attribute<'a>(&self, school: &'a SimilarSchool) -> &'a Availability<String> {
        match self {
            FilterDimension::Region => &school.region,
            FilterDimension::UrbanRural => &school.urban_rural,
            FilterDimension::LocalAuthority => &school.local_authority,
        }
    }
}

/// Selected values per dimension. An empty set means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub region: BTreeSet<String>,
    #[serde(default)]
    pub urban_rural: BTreeSet<String>,
    #[serde(default)]
    pub local_authority: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selected value. Blank values are ignored.
    pub fn select(&mut self, dimension: FilterDimension, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.selected_mut(dimension).insert(value.to_string());
    }

    /// Builder-style variant of [`select`](Self::select).
    pub fn with(mut self, dimension: FilterDimension, value: &str) -> Self {
        self.select(dimension, value);
        self
    }

    pub fn selected(&self, dimension: FilterDimension) -> &BTreeSet<String> {
        match dimension {
            FilterDimension::Region => &self.region,
            FilterDimension::UrbanRural => &self.urban_rural,
            FilterDimension::LocalAuthority => &self.local_authority,
        }
    }

    fn selected_mut(&mut self, dimension: FilterDimension) -> &mut BTreeSet<String> {
        match dimension {
            FilterDimension::Region => &mut self.region,
            FilterDimension::UrbanRural => &mut self.urban_rural,
            FilterDimension::LocalAuthority => &mut self.local_authority,
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterDimension::ALL
            .iter()
            .all(|d| self.selected(*d).is_empty())
    }

    fn is_selected(&self, dimension: FilterDimension, value: &str) -> bool {
        let value = value.trim();
        self.selected(dimension)
            .iter()
            .any(|selected| selected.eq_ignore_ascii_case(value))
    }

    /// Whether `school` passes every non-empty dimension.
    ///
    /// A school with no data for a filtered dimension never matches it.
    pub fn matches(&self, school: &SimilarSchool) -> bool {
        FilterDimension::ALL.iter().all(|dimension| {
            if self.selected(*dimension).is_empty() {
                return true;
            }
            match dimension.attribute(school) {
                Availability::Available(value) => self.is_selected(*dimension, value),
                Availability::Unavailable(_) => false,
            }
        })
    }
}

/// Keep the schools that match `criteria`, preserving input order.
pub fn filter_schools(schools: &[SimilarSchool], criteria: &FilterCriteria) -> Vec<SimilarSchool> {
    if criteria.is_empty() {
        return schools.to_vec();
    }
    schools
        .iter()
        .filter(|school| criteria.matches(school))
        .cloned()
        .collect()
}

/// One selectable value of a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

/// Selectable values for every dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub region: Vec<FilterOption>,
    pub urban_rural: Vec<FilterOption>,
    pub local_authority: Vec<FilterOption>,
}

/// Distinct available values per dimension across the whole peer group,
/// with how many peers carry each one.
pub fn filter_options(schools: &[SimilarSchool], criteria: &FilterCriteria) -> FilterOptions {
    let options_for = |dimension: FilterDimension| -> Vec<FilterOption> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for school in schools {
            if let Some(value) = dimension.attribute(school).value() {
                *counts.entry(value.trim().to_string()).or_default() += 1;
            }
        }
        counts
            .into_iter()
            .map(|(value, count)| FilterOption {
                selected: criteria.is_selected(dimension, &value),
                value,
                count,
            })
            .collect()
    };

    FilterOptions {
        region: options_for(FilterDimension::Region),
        urban_rural: options_for(FilterDimension::UrbanRural),
        local_authority: options_for(FilterDimension::LocalAuthority),
    }
}
