//! Data access layer for school records and peer groups.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / services::similar_schools / search     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  &dyn FullRepository
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                        │
//! │  - SchoolRepository (lookup, listing, dataset info)     │
//! │  - SimilarSchoolsRepository (peer groups)               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │  LocalRepository (in-memory, JSON dataset)   │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The repository is created once by [`RepositoryFactory`] and passed
//! explicitly to whoever needs it; there is no process-wide instance.

pub mod checksum;
pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use services::{dataset_status, health_check};

pub use checksum::calculate_checksum;
pub use models::{Dataset, DatasetInfo, SchoolRecord};
pub use repo_config::RepositoryConfig;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FullRepository, RepositoryError, RepositoryResult, SchoolRepository,
    SimilarSchoolsRepository,
};
