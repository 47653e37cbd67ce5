//! Repository factory for dependency injection.
//!
//! Builds the shared `Arc<dyn FullRepository>` handed to the HTTP layer
//! from runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory repository, optionally seeded from a dataset file
    Local,
    /// In-memory repository that must be loaded from a dataset file
    File,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory", "file", "json").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    ///
    /// Unset or unparseable values fall back to `Local`.
    pub fn from_env() -> Self {
        std::env::var(super::repo_config::REPOSITORY_TYPE_ENV)
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::Local)
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use school_compare::db::{RepositoryConfig, RepositoryFactory};
///
/// let config = RepositoryConfig::from_default_location()?.with_env_overrides();
/// let repo = RepositoryFactory::from_repository_config(&config)?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `data_file` - Dataset to load (required for `File`)
    pub fn create(
        repo_type: RepositoryType,
        data_file: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        match (repo_type, data_file) {
            (_, Some(path)) => Ok(Self::create_from_file(path)?),
            (RepositoryType::Local, None) => Ok(Self::create_local()),
            (RepositoryType::File, None) => Err(RepositoryError::configuration(
                "File repository requires 'repository.data_file' or SCHOOLS_DATA_FILE",
            )),
        }
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a local repository loaded from a JSON dataset file.
    pub fn create_from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Arc<LocalRepository>> {
        Ok(Arc::new(LocalRepository::load_from_file(path)?))
    }

    /// Create repository from a TOML configuration file, with environment
    /// overrides applied.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(config_path)?.with_env_overrides();
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    ///
    /// Without a `repository.toml` the environment alone decides.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = match RepositoryConfig::from_default_location() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                RepositoryConfig::default()
            }
        };
        Self::from_repository_config(&config.with_env_overrides())
    }

    /// Create repository from a RepositoryConfig instance.
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = config.repository_type()?;
        Self::create(repo_type, config.data_file())
    }
}
