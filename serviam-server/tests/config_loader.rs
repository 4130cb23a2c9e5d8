use std::{fs, path::PathBuf};

use anyhow::Result;
use serviam_server::infra::config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, DEFAULT_PAGE_SIZE,
    DEFAULT_PORT, sources::EnvConfig,
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> Result<PathBuf> {
    let path = dir.path().join("serviam.toml");
    fs::write(&path, body)?;
    Ok(path)
}

#[test]
fn file_values_override_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        r#"
            [server]
            port = 9100

            [media]
            root = "/srv/media"
        "#,
    )?;

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())?;

    assert_eq!(load.config.server.port, 9100);
    assert_eq!(load.config.server.host, "0.0.0.0");
    assert_eq!(load.config.media.root, PathBuf::from("/srv/media"));
    assert_eq!(load.config.browse.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(load.config.metadata.config_path, Some(path));
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "[browse]\npage_size = 12\n[server]\nport = 9100\n")?;

    let env = EnvConfig {
        server_port: Some(9200),
        page_size: Some(48),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new().with_config_path(&path).load_with_env(env)?;

    assert_eq!(load.config.server.port, 9200);
    assert_eq!(load.config.browse.page_size, 48);
    Ok(())
}

#[test]
fn config_path_from_environment_is_used() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "[server]\nhost = \"127.0.0.1\"\n")?;

    let env = EnvConfig {
        config_path: Some(path),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new().load_with_env(env)?;
    assert_eq!(load.config.server.host, "127.0.0.1");
    assert_eq!(load.config.server.port, DEFAULT_PORT);
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = ConfigLoader::new()
        .with_config_path("/nonexistent/serviam.toml")
        .load_with_env(EnvConfig::default())
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "[server]\nport = \"eighty\"\n")?;

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
    Ok(())
}

#[test]
fn zero_page_size_fails_guard_rails() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "[browse]\npage_size = 0\n")?;

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::ZeroPageSize)
    ));
    Ok(())
}
