//! Repository-agnostic helpers used by the HTTP layer.

use log::warn;

use super::models::DatasetInfo;
use super::repository::{FullRepository, RepositoryResult};

/// Check if the repository is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Dataset metadata for status reporting.
///
/// Failures are logged and reported as `None`; a health probe should not
/// fail because metadata is unavailable.
pub async fn dataset_status<R: FullRepository + ?Sized>(repo: &R) -> Option<DatasetInfo> {
    match repo.dataset_info().await {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("Dataset info unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::models::{SchoolDetails, Urn};

    #[tokio::test]
    async fn test_dataset_status_reports_counts() {
        let repo = LocalRepository::new();
        repo.insert_school(SchoolDetails::new(Urn::new(1), "One"));
        repo.set_peer_group(Urn::new(1), vec![]);

        assert!(health_check(&repo).await.unwrap());
        let info = dataset_status(&repo).await.unwrap();
        assert_eq!(info.school_count, 1);
        assert_eq!(info.peer_group_count, 1);
        assert!(info.checksum.is_none());
    }

    #[tokio::test]
    async fn test_dataset_status_when_unhealthy() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);
        assert!(!health_check(&repo).await.unwrap());
        assert!(dataset_status(&repo).await.is_none());
    }
}
