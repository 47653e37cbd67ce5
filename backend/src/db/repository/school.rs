//! School repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::DatasetInfo;
use crate::models::{SchoolDetails, Urn};

/// Read access to school records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared between axum tasks.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Check if the data source is usable.
    ///
    /// # Returns
    /// - `Ok(true)` if the repository can serve requests
    /// - `Ok(false)` if it is unhealthy but no error occurred
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Retrieve one school by URN.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no school has this URN
    async fn get_school(&self, urn: Urn) -> RepositoryResult<SchoolDetails>;

    /// All schools, ordered by URN.
    async fn list_schools(&self) -> RepositoryResult<Vec<SchoolDetails>>;

    /// Metadata about the loaded data.
    async fn dataset_info(&self) -> RepositoryResult<DatasetInfo>;
}
