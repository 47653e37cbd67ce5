//! School records.

use serde::{Deserialize, Serialize};

use super::availability::Availability;
use super::measures::PerformanceMeasures;

crate::define_id_type!(u32, Urn);

/// Postal address of a school.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub town: String,
    #[serde(default)]
    pub postcode: String,
}

impl Address {
    /// Single-line address with empty parts skipped.
    pub fn display(&self) -> String {
        [&self.street, &self.locality, &self.town, &self.postcode]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// WGS84 position of a school.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: qtty::Degrees,
    pub longitude: qtty::Degrees,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: qtty::Degrees::new(latitude),
            longitude: qtty::Degrees::new(longitude),
        }
    }

    /// Whether the position lies within the valid latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        let lat = self.latitude.value();
        let lon = self.longitude.value();
        lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
    }
}

/// Full school record as held by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolDetails {
    pub urn: Urn,
    pub name: String,
    pub address: Address,
    pub coordinates: Availability<Coordinates>,
    pub region: Availability<String>,
    pub urban_rural: Availability<String>,
    pub local_authority: Availability<String>,
    pub phase: Availability<String>,
    pub school_type: Availability<String>,
    pub number_of_pupils: Availability<u32>,
    pub measures: PerformanceMeasures,
}

impl SchoolDetails {
    /// A record with the given identity and every optional attribute missing.
    pub fn new(urn: Urn, name: impl Into<String>) -> Self {
        Self {
            urn,
            name: name.into(),
            address: Address::default(),
            coordinates: Availability::missing(),
            region: Availability::missing(),
            urban_rural: Availability::missing(),
            local_authority: Availability::missing(),
            phase: Availability::missing(),
            school_type: Availability::missing(),
            number_of_pupils: Availability::missing(),
            measures: PerformanceMeasures::new(),
        }
    }

    pub fn summary(&self) -> SchoolSummary {
        SchoolSummary {
            urn: self.urn,
            name: self.name.clone(),
            address: self.address.display(),
            town: self.address.town.clone(),
            postcode: self.address.postcode.clone(),
            coordinates: self.coordinates.clone().into_option(),
        }
    }
}

/// A peer-group member as seen by the comparison pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarSchool {
    pub urn: Urn,
    pub name: String,
    pub address: Address,
    pub coordinates: Availability<Coordinates>,
    pub region: Availability<String>,
    pub urban_rural: Availability<String>,
    pub local_authority: Availability<String>,
    pub measures: PerformanceMeasures,
}

impl From<&SchoolDetails> for SimilarSchool {
    fn from(details: &SchoolDetails) -> Self {
        Self {
            urn: details.urn,
            name: details.name.clone(),
            address: details.address.clone(),
            coordinates: details.coordinates.clone(),
            region: details.region.clone(),
            urban_rural: details.urban_rural.clone(),
            local_authority: details.local_authority.clone(),
            measures: details.measures.clone(),
        }
    }
}

/// Lightweight listing entry used by search results and view headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolSummary {
    pub urn: Urn,
    pub name: String,
    pub address: String,
    pub town: String,
    pub postcode: String,
    pub coordinates: Option<Coordinates>,
}
