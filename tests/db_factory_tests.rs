//! Tests for db::factory module - repository creation and configuration.

mod support;

use std::io::Write;
use std::str::FromStr;

use campus_scheduler::db::factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
use campus_scheduler::db::repository::RepositoryError;
use campus_scheduler::db::RepositoryConfig;

#[test]
fn test_repository_type_from_str_local() {
    let rt = RepositoryType::from_str("local").unwrap();
    assert_eq!(rt, RepositoryType::Local);

    let rt = RepositoryType::from_str("LOCAL").unwrap();
    assert_eq!(rt, RepositoryType::Local);

    let rt = RepositoryType::from_str("memory").unwrap();
    assert_eq!(rt, RepositoryType::Local);
}

#[test]
fn test_repository_type_from_str_invalid() {
    let result = RepositoryType::from_str("invalid");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unknown repository type"));
}

#[test]
fn test_repository_type_from_env_default() {
    support::with_scoped_env(&[("REPOSITORY_TYPE", None)], || {
        let rt = RepositoryType::from_env();
        assert_eq!(rt, RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_explicit() {
    support::with_scoped_env(&[("REPOSITORY_TYPE", Some("local"))], || {
        let rt = RepositoryType::from_env();
        assert_eq!(rt, RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_invalid_defaults_to_local() {
    support::with_scoped_env(&[("REPOSITORY_TYPE", Some("invalid"))], || {
        let rt = RepositoryType::from_env();
        assert_eq!(rt, RepositoryType::Local);
    });
}

#[tokio::test]
async fn test_create_local_repository() {
    let repo = RepositoryFactory::create_local();
    assert!(repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_create_local_via_factory() {
    let result = RepositoryFactory::create(RepositoryType::Local).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_factory_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scheduler.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[repository]\ntype = \"local\"").unwrap();

    let repo = RepositoryFactory::from_config_file(&path).await.unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_factory_from_missing_config_file() {
    let result = RepositoryFactory::from_config_file("/nonexistent/scheduler.toml").await;
    assert!(matches!(
        result,
        Err(RepositoryError::ConfigurationError { .. })
    ));
}

#[tokio::test]
async fn test_factory_from_config_file_bad_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scheduler.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[repository]\ntype = \"oracle\"").unwrap();

    let result = RepositoryFactory::from_config_file(&path).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ConfigurationError { .. })
    ));
}

#[tokio::test]
async fn test_builder_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scheduler.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[repository]\ntype = \"memory\"").unwrap();

    let repo = RepositoryBuilder::new()
        .from_config_file(&path)
        .unwrap()
        .build()
        .await
        .unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_builder_respects_env() {
    let repo = support::with_scoped_env(&[("REPOSITORY_TYPE", Some("local"))], || {
        RepositoryBuilder::new().from_env().unwrap()
    })
    .build()
    .await
    .unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[test]
fn test_config_file_solver_settings_reach_solver_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scheduler.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "[repository]\ntype = \"local\"\n\n[solver]\nmax_steps = 750\ndays = [\"Monday\"]\nday_starts = [\"09:00\", \"11:00\"]\nblock_minutes = 100"
    )
    .unwrap();

    let config = RepositoryConfig::from_file(&path).unwrap();
    let solver = config.to_solver_config().unwrap();
    assert_eq!(solver.max_steps, 750);
    assert_eq!(solver.catalog.len(), 2);
}

#[test]
fn test_repository_type_debug() {
    let rt = RepositoryType::Local;
    let debug_str = format!("{:?}", rt);
    assert!(debug_str.contains("Local"));
}

#[test]
fn test_repository_type_copy() {
    let rt1 = RepositoryType::Local;
    let rt2 = rt1;
    assert_eq!(rt1, rt2);
}
