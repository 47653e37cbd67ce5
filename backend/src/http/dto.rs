//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies of the school endpoints are re-exported from the routes
//! module since they already derive Serialize/Deserialize. This module adds
//! the query-string shapes and the health response.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Similar schools
    ComparisonView, MapSchool,
    // Search
    SchoolSuggestion, SearchResults, SuggestResponse,
    // Records
    DatasetInfo, SchoolDetails,
};

use crate::services::search::SUGGEST_LIMIT;

/// Query parameters for the search endpoint.
///
/// `page` is kept as text so that garbage falls back to page 1 instead of
/// rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub page: Option<String>,
}

/// Query parameters for the suggest endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
    /// Maximum number of suggestions (default: 10)
    #[serde(default)]
    pub limit: Option<String>,
}

impl SuggestQuery {
    /// Requested limit, or the default when absent or unparseable.
    pub fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|limit| limit.trim().parse().ok())
            .unwrap_or(SUGGEST_LIMIT)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository status
    pub database: String,
    /// Loaded dataset, when the repository can describe it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetInfo>,
}
