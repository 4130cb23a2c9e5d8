use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::{
    BrowseConfig, Config, ConfigMetadata, MediaConfig, ServerConfig,
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["serviam.toml", "config/serviam.toml"];

/// Resolved configuration plus anything worth warning about at startup.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load `.env`, read the process environment and resolve.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = Self::load_env_file()?;
        let mut load = self.load_with_env(EnvConfig::gather()?)?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve against an already-gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No serviam.toml detected; using defaults and environment variables",
                "Create serviam.toml or point SERVIAM_CONFIG_PATH at a configuration file",
            );
        }

        let config = compose_config(file_config.unwrap_or_default(), env, config_path);
        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }

    /// Load `.env` from the working directory or its ancestors, if any.
    fn load_env_file() -> Result<bool, ConfigLoadError> {
        match dotenvy::dotenv() {
            Ok(_) => Ok(true),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // An explicitly named file must exist; discovered ones are optional.
        let path = match self.config_path.as_ref().or(env.config_path.as_ref())
        {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigLoadError::MissingConfig {
                        path: explicit.clone(),
                    });
                }
                explicit.clone()
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(found) => found,
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Config {
    let defaults = Config::default();
    let FileConfig {
        server: file_server,
        media: file_media,
        browse: file_browse,
    } = file;

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or(defaults.server.host),
        port: env
            .server_port
            .or(file_server.port)
            .unwrap_or(defaults.server.port),
    };

    let media = MediaConfig {
        root: env
            .media_root
            .or(file_media.root)
            .unwrap_or(defaults.media.root),
        files_dir: env
            .files_dir
            .or(file_media.files_dir)
            .unwrap_or(defaults.media.files_dir),
    };

    let browse = BrowseConfig {
        page_size: env
            .page_size
            .or(file_browse.page_size)
            .unwrap_or(defaults.browse.page_size),
    };

    Config {
        server,
        media,
        browse,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidEnv { name: &'static str, value: String },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
