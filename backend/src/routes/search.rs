use serde::{Deserialize, Serialize};

use crate::models::{SchoolSummary, Urn};
use crate::services::pagination::PageInfo;

// =========================================================
// School search and autocomplete types + routes
// =========================================================

/// One autocomplete entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolSuggestion {
    pub urn: Urn,
    pub name: String,
    pub town: String,
    pub postcode: String,
}

/// Autocomplete response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub query: String,
    pub suggestions: Vec<SchoolSuggestion>,
}

/// One page of full-text school search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SchoolSummary>,
    pub page_info: PageInfo,
}

pub const SEARCH_SCHOOLS: &str = "/schools/search";
pub const SUGGEST_SCHOOLS: &str = "/schools/suggest";
pub const GET_SCHOOL: &str = "/schools/{urn}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_serialize() {
        let suggestion = SchoolSuggestion {
            urn: Urn::new(42),
            name: "Alpha Academy".to_string(),
            town: "Leeds".to_string(),
            postcode: "LS1 1AA".to_string(),
        };
        let json = serde_json::to_string(&suggestion).unwrap();
        assert!(json.contains(r#""urn":42"#));
        let back: SchoolSuggestion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, suggestion);
    }

    #[test]
    fn test_route_constants() {
        assert_eq!(SEARCH_SCHOOLS, "/schools/search");
        assert_eq!(SUGGEST_SCHOOLS, "/schools/suggest");
        assert_eq!(GET_SCHOOL, "/schools/{urn}");
    }
}
