//! Repository trait definitions for school data.
//!
//! The data access layer is split into two focused traits so that the
//! comparison pipeline only depends on what it actually reads.
//!
//! - [`error`]: Error types for repository operations
//! - [`school`]: School lookups, listing and dataset metadata
//! - [`similar_schools`]: Peer group lookups
//!
//! # Convenience Trait Bound
//!
//! Handlers and services take `&dyn FullRepository`:
//!
//! ```ignore
//! async fn describe(repo: &dyn FullRepository, urn: Urn) -> RepositoryResult<String> {
//!     let school = repo.get_school(urn).await?;
//!     let peers = repo.fetch_similar_schools(urn).await?;
//!     Ok(format!("{} has {} similar schools", school.name, peers.len()))
//! }
//! ```

pub mod error;
pub mod school;
pub mod similar_schools;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use school::SchoolRepository;
pub use similar_schools::SimilarSchoolsRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements both
/// [`SchoolRepository`] and [`SimilarSchoolsRepository`].
pub trait FullRepository: SchoolRepository + SimilarSchoolsRepository {}

impl<T> FullRepository for T where T: SchoolRepository + SimilarSchoolsRepository {}
