//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::search::SchoolSuggestion;
pub use crate::routes::search::SearchResults;
pub use crate::routes::search::SuggestResponse;
pub use crate::routes::similar_schools::ComparisonView;
pub use crate::routes::similar_schools::MapRole;
pub use crate::routes::similar_schools::MapSchool;

pub use crate::models::{
    Address, Availability, Coordinates, Metric, PerformanceMeasures, SchoolDetails, SchoolSummary,
    SimilarSchool, UnavailableReason, Urn,
};
pub use crate::services::filter::{FilterCriteria, FilterDimension, FilterOption, FilterOptions};
pub use crate::services::pagination::{PageInfo, PageRequest, PAGE_SIZE};
pub use crate::services::similar_schools::SimilarSchoolsQuery;
pub use crate::services::sort::SortKey;

pub use crate::db::models::DatasetInfo;
