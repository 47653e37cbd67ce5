//! Data models for the repository layer: dataset file format and metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{
    Address, Availability, Coordinates, Metric, PerformanceMeasures, SchoolDetails, Urn,
};

/// Metadata about the data currently loaded in a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// SHA-256 of the source file, if the data came from one.
    pub checksum: Option<String>,
    pub school_count: usize,
    pub peer_group_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// A numeric cell in the dataset file: either a number or a source code
/// such as `"SUPP"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMeasure {
    Number(f64),
    Text(String),
}

impl RawMeasure {
    pub fn into_availability(self) -> Availability<f64> {
        match self {
            RawMeasure::Number(v) if v.is_finite() => Availability::Available(v),
            RawMeasure::Number(_) => Availability::missing(),
            RawMeasure::Text(text) => Availability::<f64>::from_code(&text),
        }
    }
}

/// One school as written in the dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub urn: Urn,
    pub name: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub urban_rural: Option<String>,
    #[serde(default)]
    pub local_authority: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub school_type: Option<String>,
    #[serde(default)]
    pub number_of_pupils: Option<u32>,
    /// Measures keyed by metric key (`"attainment-8"`, ...).
    #[serde(default)]
    pub measures: BTreeMap<String, RawMeasure>,
}

fn text_attribute(value: Option<String>) -> Availability<String> {
    value.map(Availability::<String>::from_text).unwrap_or_default()
}

impl SchoolRecord {
    /// Convert to the domain record. Unknown measure keys are skipped.
    pub fn into_details(self) -> SchoolDetails {
        let coordinates = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => {
                let coordinates = Coordinates::new(lat, lon);
                if coordinates.is_valid() {
                    Availability::Available(coordinates)
                } else {
                    log::warn!("school {} has out-of-range coordinates ({}, {})", self.urn, lat, lon);
                    Availability::missing()
                }
            }
            _ => Availability::missing(),
        };

        let mut measures = PerformanceMeasures::new();
        for (key, raw) in self.measures {
            match Metric::from_key(&key) {
                Some(metric) => measures.set(metric, raw.into_availability()),
                None => log::warn!("school {}: ignoring unknown measure '{}'", self.urn, key),
            }
        }

        SchoolDetails {
            urn: self.urn,
            name: self.name,
            address: self.address,
            coordinates,
            region: text_attribute(self.region),
            urban_rural: text_attribute(self.urban_rural),
            local_authority: text_attribute(self.local_authority),
            phase: text_attribute(self.phase),
            school_type: text_attribute(self.school_type),
            number_of_pupils: Availability::from_option(self.number_of_pupils),
            measures,
        }
    }
}

/// Top-level dataset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub schools: Vec<SchoolRecord>,
    /// Peer groups: school URN to its similar schools, in display order.
    #[serde(default)]
    pub similar_schools: BTreeMap<Urn, Vec<Urn>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnavailableReason;

    #[test]
    fn test_parse_dataset() {
        let json = r#"{
            "schools": [
                {
                    "urn": 100001,
                    "name": "Alpha Academy",
                    "address": {"street": "1 High St", "town": "Leeds", "postcode": "LS1 1AA"},
                    "latitude": 53.8,
                    "longitude": -1.55,
                    "region": "Yorkshire and the Humber",
                    "urban_rural": "",
                    "measures": {"attainment-8": 47.5, "ebacc-entry": "SUPP", "progress-8": 0.1}
                }
            ],
            "similar_schools": {"100001": [100002, 100003]}
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.similar_schools[&Urn::new(100001)], vec![Urn::new(100002), Urn::new(100003)]);

        let details = dataset.schools.into_iter().next().unwrap().into_details();
        assert_eq!(details.address.town, "Leeds");
        assert!(details.coordinates.is_available());
        assert!(!details.urban_rural.is_available());
        assert!(!details.local_authority.is_available());
        assert_eq!(details.measures.get(Metric::Attainment8), Availability::Available(47.5));
        assert_eq!(
            details.measures.get(Metric::EbaccEntry),
            Availability::Unavailable(UnavailableReason::Suppressed)
        );
        assert_eq!(details.measures.len(), 2);
    }

    #[test]
    fn test_out_of_range_coordinates_are_missing() {
        let record: SchoolRecord = serde_json::from_str(
            r#"{"urn": 5, "name": "Nowhere School", "latitude": 200.0, "longitude": 0.0}"#,
        )
        .unwrap();
        assert!(!record.into_details().coordinates.is_available());
    }

    #[test]
    fn test_raw_measure_conversion() {
        assert_eq!(RawMeasure::Number(12.0).into_availability(), Availability::Available(12.0));
        assert_eq!(
            RawMeasure::Text("NP".to_string()).into_availability(),
            Availability::Unavailable(UnavailableReason::NotPublished)
        );
        assert_eq!(
            RawMeasure::Text("55.5".to_string()).into_availability(),
            Availability::Available(55.5)
        );
    }
}
