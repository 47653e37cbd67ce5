//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    ComparisonView, HealthResponse, SchoolDetails, SearchQuery, SearchResults, SuggestQuery,
    SuggestResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{PageRequest, SimilarSchoolsQuery, Urn};
use crate::db::repository::SchoolRepository;
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_urn(raw: &str) -> Result<Urn, AppError> {
    raw.parse::<Urn>()
        .map_err(|_| AppError::NotFound(format!("School {} not found", raw)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is usable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo = state.repository.as_ref();
    let db_status = match db_services::health_check(repo).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
        dataset: db_services::dataset_status(repo).await,
    }))
}

// =============================================================================
// School Search
// =============================================================================

/// GET /v1/schools/search?q=&page=
///
/// Paginated search by name, town, postcode or URN.
pub async fn search_schools(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult<SearchResults> {
    let page = PageRequest::parse(query.page.as_deref());
    let results = services::search_schools(state.repository.as_ref(), &query.q, page).await?;
    tracing::debug!(
        query = %results.query,
        total = results.page_info.total_results,
        "school search"
    );
    Ok(Json(results))
}

/// GET /v1/schools/suggest?q=&limit=
///
/// Autocomplete suggestions. Text shorter than two characters returns an
/// empty list.
pub async fn suggest_schools(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> HandlerResult<SuggestResponse> {
    let suggestions =
        services::suggest_schools(state.repository.as_ref(), &query.q, query.limit()).await?;

    Ok(Json(SuggestResponse {
        query: query.q.trim().to_string(),
        suggestions,
    }))
}

// =============================================================================
// School Records
// =============================================================================

/// GET /v1/schools/{urn}
pub async fn get_school(
    State(state): State<AppState>,
    Path(urn): Path<String>,
) -> HandlerResult<SchoolDetails> {
    let urn = parse_urn(&urn)?;
    let school = state.repository.get_school(urn).await?;
    Ok(Json(school))
}

/// GET /v1/schools/{urn}/similar-schools
///
/// Filtered, sorted, paginated peer list plus the map markers for the whole
/// filtered set. Filter keys (`region`, `urban_rural`, `local_authority`)
/// may repeat; `sort`, `page` and `compare_with` are optional.
pub async fn get_similar_schools(
    State(state): State<AppState>,
    Path(urn): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> HandlerResult<ComparisonView> {
    let urn = parse_urn(&urn)?;
    let query = SimilarSchoolsQuery::from_pairs(&params);

    let view = services::get_comparison_view(state.repository.as_ref(), urn, &query).await?;
    tracing::debug!(
        %urn,
        sort = %view.sort,
        results = view.page_info.total_results,
        "similar schools"
    );
    Ok(Json(view))
}
