//! In-memory local repository implementation.
//!
//! Holds the whole school dataset in memory behind a single
//! `parking_lot::RwLock`. Reads clone the records they return, so a request
//! never observes a half-applied update.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::db::checksum::calculate_checksum;
use crate::db::models::{Dataset, DatasetInfo};
use crate::db::repository::*;
use crate::models::{SchoolDetails, SimilarSchool, Urn};

/// In-memory local repository.
///
/// # Example
/// ```
/// use school_compare::db::repositories::LocalRepository;
/// use school_compare::models::{SchoolDetails, Urn};
///
/// let repo = LocalRepository::new();
/// repo.insert_school(SchoolDetails::new(Urn::new(100001), "Alpha Academy"));
/// repo.insert_school(SchoolDetails::new(Urn::new(100002), "Beta College"));
/// repo.set_peer_group(Urn::new(100001), vec![Urn::new(100002)]);
/// assert_eq!(repo.school_count(), 2);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    schools: HashMap<Urn, SchoolDetails>,
    peer_groups: HashMap<Urn, Vec<Urn>>,

    // Dataset provenance
    checksum: Option<String>,
    loaded_at: DateTime<Utc>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            schools: HashMap::new(),
            peer_groups: HashMap::new(),
            checksum: None,
            loaded_at: Utc::now(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Build a repository from a parsed dataset.
    ///
    /// # Errors
    /// `RepositoryError::ValidationError` if two schools share a URN.
    pub fn from_dataset(dataset: Dataset, checksum: Option<String>) -> RepositoryResult<Self> {
        let mut data = LocalData {
            checksum,
            ..Default::default()
        };

        for record in dataset.schools {
            let urn = record.urn;
            if data.schools.insert(urn, record.into_details()).is_some() {
                return Err(RepositoryError::validation_with_context(
                    format!("Duplicate school URN {}", urn),
                    ErrorContext::new("load_dataset")
                        .with_entity("school")
                        .with_entity_id(urn),
                ));
            }
        }

        for (urn, peers) in &dataset.similar_schools {
            if !data.schools.contains_key(urn) {
                log::warn!("peer group for unknown school {} will never be served", urn);
            }
            let dangling = peers
                .iter()
                .filter(|peer| !data.schools.contains_key(peer))
                .count();
            if dangling > 0 {
                log::warn!(
                    "peer group of school {} references {} unknown school(s)",
                    urn,
                    dangling
                );
            }
        }
        data.peer_groups = dataset.similar_schools.into_iter().collect();

        log::info!(
            "Loaded {} schools and {} peer groups",
            data.schools.len(),
            data.peer_groups.len()
        );

        Ok(Self {
            data: Arc::new(RwLock::new(data)),
        })
    }

    /// Load a JSON dataset file, recording its SHA-256 checksum.
    ///
    /// # Errors
    /// `RepositoryError::DataSourceError` if the file cannot be read or parsed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let context = || {
            ErrorContext::new("load_dataset")
                .with_entity("dataset")
                .with_details(path.display().to_string())
        };

        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::data_source_with_context(
                format!("Failed to read dataset file: {}", e),
                context(),
            )
        })?;
        let dataset: Dataset = serde_json::from_str(&content).map_err(|e| {
            RepositoryError::data_source_with_context(
                format!("Failed to parse dataset file: {}", e),
                context(),
            )
        })?;

        log::info!("Loading dataset from {}", path.display());
        Self::from_dataset(dataset, Some(calculate_checksum(&content)))
    }

    /// Add or replace a school.
    pub fn insert_school(&self, school: SchoolDetails) {
        let mut data = self.data.write();
        data.schools.insert(school.urn, school);
    }

    /// Set the peer group of `urn`, replacing any previous one.
    pub fn set_peer_group(&self, urn: Urn, peers: Vec<Urn>) {
        let mut data = self.data.write();
        data.peer_groups.insert(urn, peers);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of schools stored.
    pub fn school_count(&self) -> usize {
        self.data.read().schools.len()
    }

    /// Check if a school exists.
    pub fn has_school(&self, urn: Urn) -> bool {
        self.data.read().schools.contains_key(&urn)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Repository is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn school_not_found(urn: Urn, operation: &str) -> RepositoryError {
    RepositoryError::not_found_with_context(
        format!("School {} not found", urn),
        ErrorContext::new(operation)
            .with_entity("school")
            .with_entity_id(urn),
    )
}

#[async_trait]
impl SchoolRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn get_school(&self, urn: Urn) -> RepositoryResult<SchoolDetails> {
        self.check_health("get_school")?;
        let data = self.data.read();
        data.schools
            .get(&urn)
            .cloned()
            .ok_or_else(|| school_not_found(urn, "get_school"))
    }

    async fn list_schools(&self) -> RepositoryResult<Vec<SchoolDetails>> {
        self.check_health("list_schools")?;
        let data = self.data.read();
        let mut schools: Vec<SchoolDetails> = data.schools.values().cloned().collect();
        schools.sort_by_key(|school| school.urn);
        Ok(schools)
    }

    async fn dataset_info(&self) -> RepositoryResult<DatasetInfo> {
        self.check_health("dataset_info")?;
        let data = self.data.read();
        Ok(DatasetInfo {
            checksum: data.checksum.clone(),
            school_count: data.schools.len(),
            peer_group_count: data.peer_groups.len(),
            loaded_at: data.loaded_at,
        })
    }
}

#[async_trait]
impl SimilarSchoolsRepository for LocalRepository {
    async fn fetch_similar_schools(&self, urn: Urn) -> RepositoryResult<Vec<SimilarSchool>> {
        self.check_health("fetch_similar_schools")?;
        let data = self.data.read();

        if !data.schools.contains_key(&urn) {
            return Err(school_not_found(urn, "fetch_similar_schools"));
        }
        let peers = data.peer_groups.get(&urn).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("No similar schools for school {}", urn),
                ErrorContext::new("fetch_similar_schools")
                    .with_entity("peer_group")
                    .with_entity_id(urn),
            )
        })?;

        Ok(peers
            .iter()
            .filter_map(|peer| match data.schools.get(peer) {
                Some(details) => Some(SimilarSchool::from(details)),
                None => {
                    log::warn!("school {} lists unknown similar school {}", urn, peer);
                    None
                }
            })
            .collect())
    }
}
