//! Similar-schools repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{SimilarSchool, Urn};

/// Access to the pre-computed peer groups.
#[async_trait]
pub trait SimilarSchoolsRepository: Send + Sync {
    /// Peers of the school `urn`, in the order the peer group was stored.
    ///
    /// Peer URNs with no school record are skipped.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the school is unknown or has no peer group
    async fn fetch_similar_schools(&self, urn: Urn) -> RepositoryResult<Vec<SimilarSchool>>;
}
