//! Service layer for business logic and orchestration.
//!
//! Services sit between the repository and the HTTP handlers. The
//! comparison stages (filter, sort, pagination, map projection) are pure
//! functions over peer lists; `similar_schools` and `search` orchestrate
//! them against a repository.

pub mod filter;
pub mod map_projection;
pub mod pagination;
pub mod search;
pub mod similar_schools;
pub mod sort;

pub use search::{search_schools, suggest_schools};
pub use similar_schools::{build_comparison_view, get_comparison_view, SimilarSchoolsQuery};
