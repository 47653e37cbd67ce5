//! # School comparison backend
//!
//! Finds, filters and ranks similar schools for the school comparison
//! service, and answers school search and autocomplete queries.
//!
//! ## Features
//!
//! - **Similar schools**: filter a school's peer group by region, urban/rural
//!   classification and local authority, sort it by name or by a performance
//!   measure, paginate it, and project the filtered set onto map markers
//! - **Search**: paginated search and autocomplete over names, towns,
//!   postcodes and URNs
//! - **Dataset loading**: JSON dataset files with SHA-256 provenance
//! - **HTTP API**: RESTful endpoints for the frontend
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`db`]: Repository traits, the in-memory repository and configuration
//! - [`models`]: School records, availability wrapper, performance measures
//! - [`services`]: The comparison pipeline and search
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific response types and paths

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
