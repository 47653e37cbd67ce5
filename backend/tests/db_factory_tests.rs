//! Tests for db::factory and db::repo_config - repository creation and configuration.

mod support;

use std::io::Write;
use std::str::FromStr;

use school_compare::db::factory::{RepositoryFactory, RepositoryType};
use school_compare::db::repo_config::RepositoryConfig;
use school_compare::db::{calculate_checksum, RepositoryError, SchoolRepository};
use school_compare::models::Urn;

#[test]
fn test_repository_type_from_str_local() {
    assert_eq!(RepositoryType::from_str("local").unwrap(), RepositoryType::Local);
    assert_eq!(RepositoryType::from_str("LOCAL").unwrap(), RepositoryType::Local);
    assert_eq!(RepositoryType::from_str("memory").unwrap(), RepositoryType::Local);
}

#[test]
fn test_repository_type_from_str_invalid() {
    let result = RepositoryType::from_str("postgres");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unknown repository type"));
}

#[test]
fn test_repository_type_from_env_default() {
    support::with_scoped_env(&[("REPOSITORY_TYPE", None)], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_explicit() {
    support::with_scoped_env(&[("REPOSITORY_TYPE", Some("file"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::File);
    });
    support::with_scoped_env(&[("REPOSITORY_TYPE", Some("nonsense"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_env_overrides_config_file_values() {
    let config: RepositoryConfig =
        toml::from_str("[repository]\ntype = \"local\"\ndata_file = \"a.json\"\n").unwrap();

    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("file")),
            ("SCHOOLS_DATA_FILE", Some("/srv/data/b.json")),
        ],
        || {
            let config = config.clone().with_env_overrides();
            assert_eq!(config.repository_type().unwrap(), RepositoryType::File);
            assert_eq!(
                config.data_file().unwrap().to_str(),
                Some("/srv/data/b.json")
            );
        },
    );

    support::with_scoped_env(
        &[("REPOSITORY_TYPE", None), ("SCHOOLS_DATA_FILE", Some("  "))],
        || {
            let config = config.clone().with_env_overrides();
            assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
            assert_eq!(config.data_file().unwrap().to_str(), Some("a.json"));
        },
    );
}

#[tokio::test]
async fn test_factory_loads_data_file() {
    let path = support::sample_dataset_path();
    let repo = RepositoryFactory::create(RepositoryType::File, Some(&path)).unwrap();

    let info = repo.dataset_info().await.unwrap();
    assert_eq!(info.school_count, 7);
    assert_eq!(info.peer_group_count, 3);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(info.checksum, Some(calculate_checksum(&content)));
}

#[tokio::test]
async fn test_factory_from_config_file() {
    let data_path = support::sample_dataset_path();
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config_file,
        "[repository]\ntype = \"file\"\ndata_file = {:?}",
        data_path.to_str().unwrap()
    )
    .unwrap();

    let repo = support::with_scoped_env(
        &[("REPOSITORY_TYPE", None), ("SCHOOLS_DATA_FILE", None)],
        || RepositoryFactory::from_config_file(config_file.path()),
    )
    .unwrap();

    let school = repo.get_school(Urn::new(136290)).await.unwrap();
    assert_eq!(school.name, "Heaton Park Academy");
}

#[tokio::test]
async fn test_factory_resolves_data_file_next_to_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(support::sample_dataset_path(), dir.path().join("schools.json")).unwrap();
    let config_path = dir.path().join("repository.toml");
    std::fs::write(
        &config_path,
        "[repository]\ntype = \"file\"\ndata_file = \"schools.json\"\n",
    )
    .unwrap();
    assert_ne!(std::env::current_dir().unwrap(), dir.path());

    let repo = support::with_scoped_env(
        &[("REPOSITORY_TYPE", None), ("SCHOOLS_DATA_FILE", None)],
        || RepositoryFactory::from_config_file(&config_path),
    )
    .unwrap();

    let info = repo.dataset_info().await.unwrap();
    assert_eq!(info.school_count, 7);
    let school = repo.get_school(Urn::new(136290)).await.unwrap();
    assert_eq!(school.name, "Heaton Park Academy");
}

#[test]
fn test_factory_missing_data_file_is_data_source_error() {
    let result = RepositoryFactory::create(
        RepositoryType::Local,
        Some(std::path::Path::new("/nonexistent/schools.json")),
    );
    assert!(matches!(
        result,
        Err(RepositoryError::DataSourceError { .. })
    ));
}

#[test]
fn test_factory_invalid_config_file() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(config_file, "[repository\ntype = ").unwrap();
    let result = RepositoryFactory::from_config_file(config_file.path());
    assert!(matches!(
        result,
        Err(RepositoryError::ConfigurationError { .. })
    ));
}
