use thiserror::Error;

use super::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("browse.page_size must be at least 1")]
    ZeroPageSize,
    #[error("server.host must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.browse.page_size == 0 {
        return Err(ConfigGuardRailError::ZeroPageSize);
    }
    if config.server.host.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyHost);
    }

    if !config.media.root.is_dir() {
        warnings.push_with_hint(
            format!(
                "media root {} is not a directory; the catalog will fail to load",
                config.media.root.display()
            ),
            "Set MEDIA_ROOT or media.root to the directory holding films/, collections/ and shows/",
        );
    }
    if !config.media.files_dir.is_dir() {
        warnings.push(format!(
            "static files directory {} is missing; placeholder posters will not be served",
            config.media.files_dir.display()
        ));
    }

    Ok(warnings)
}
