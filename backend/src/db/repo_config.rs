//! Repository configuration file support.
//!
//! Reads `repository.toml`:
//!
//! ```toml
//! [repository]
//! type = "local"
//! data_file = "data/schools.json"
//! ```
//!
//! A relative `data_file` is taken relative to the config file.
//! `REPOSITORY_TYPE` and `SCHOOLS_DATA_FILE` override the file's values;
//! the environment path is used as given.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Environment variable overriding `repository.type`.
pub const REPOSITORY_TYPE_ENV: &str = "REPOSITORY_TYPE";
/// Environment variable overriding `repository.data_file`.
pub const DATA_FILE_ENV: &str = "SCHOOLS_DATA_FILE";

/// Repository configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
    /// JSON dataset to load at startup.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_repo_type() -> String {
    "local".to_string()
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
            data_file: None,
        }
    }
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// A relative `data_file` is resolved against the directory holding the
    /// config file.
    ///
    /// # Returns
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        if let (Some(data_file), Some(dir)) = (&config.repository.data_file, path.parent()) {
            if data_file.is_relative() && !dir.as_os_str().is_empty() {
                config.repository.data_file = Some(dir.join(data_file));
            }
        }

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Err(RepositoryError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using repository config {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Apply `REPOSITORY_TYPE` and `SCHOOLS_DATA_FILE` from the environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(repo_type) = std::env::var(REPOSITORY_TYPE_ENV) {
            self.repository.repo_type = repo_type;
        }
        if let Ok(data_file) = std::env::var(DATA_FILE_ENV) {
            if !data_file.trim().is_empty() {
                self.repository.data_file = Some(PathBuf::from(data_file));
            }
        }
        self
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repository.repo_type).map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })
    }

    /// The dataset file to load, if any.
    pub fn data_file(&self) -> Option<&Path> {
        self.repository.data_file.as_deref()
    }
}
