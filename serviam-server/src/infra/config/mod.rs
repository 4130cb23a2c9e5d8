//! Layered server configuration.
//!
//! Values resolve as defaults, then an optional TOML file, then environment
//! variables (including a `.env` file), then command-line flags applied by
//! `main`.

pub mod loader;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8042;
pub const DEFAULT_MEDIA_ROOT: &str = "media";
pub const DEFAULT_FILES_DIR: &str = "files";
pub const DEFAULT_PAGE_SIZE: usize = 24;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub media: MediaConfig,
    pub browse: BrowseConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    /// Holds `films/`, `collections/` and `shows/`; served under `/media`.
    pub root: PathBuf,
    /// Static assets such as the placeholder poster; served under `/files`.
    pub files_dir: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_MEDIA_ROOT),
            files_dir: PathBuf::from(DEFAULT_FILES_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    /// Cards on the first page returned by `/results`.
    pub page_size: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Where the configuration came from, for startup logging.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
