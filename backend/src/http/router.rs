//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::search::{GET_SCHOOL, SEARCH_SCHOOLS, SUGGEST_SCHOOLS};
use crate::routes::similar_schools::GET_SIMILAR_SCHOOLS;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static segments take precedence over `{urn}` in axum's matcher.
    let api_v1 = Router::new()
        .route(SEARCH_SCHOOLS, get(handlers::search_schools))
        .route(SUGGEST_SCHOOLS, get(handlers::suggest_schools))
        .route(GET_SCHOOL, get(handlers::get_school))
        .route(GET_SIMILAR_SCHOOLS, get(handlers::get_similar_schools));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
