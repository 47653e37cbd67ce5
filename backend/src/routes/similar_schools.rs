use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, SchoolSummary, SimilarSchool, Urn};
use crate::services::filter::{FilterCriteria, FilterOptions};
use crate::services::pagination::PageInfo;
use crate::services::sort::SortKey;

// =========================================================
// Similar-schools comparison types + route
// =========================================================

/// What a map marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapRole {
    /// The school whose peer group is being viewed.
    Main,
    /// The school the user chose to compare against.
    Compared,
    /// Any other peer.
    Peer,
}

/// Minimal school data for client-side map rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSchool {
    pub urn: Urn,
    pub name: String,
    pub coordinates: Option<Coordinates>,
    pub role: MapRole,
}

/// A school compared against its similar schools, for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub school: SchoolSummary,
    pub compare_with: Option<Urn>,
    pub sort: SortKey,
    pub filters: FilterCriteria,
    pub filter_options: FilterOptions,
    /// The requested page of the filtered, sorted peer list.
    pub results: Vec<SimilarSchool>,
    pub page_info: PageInfo,
    /// Every filtered peer, regardless of page.
    pub map_schools: Vec<MapSchool>,
}

pub const GET_SIMILAR_SCHOOLS: &str = "/schools/{urn}/similar-schools";
