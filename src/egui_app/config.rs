use std::path::{Path, PathBuf};

use crate::egui_app::theme::Theme;
use crate::shared::config::{ConfigError, ListConfig};
use crate::shared::messaging::VerifiedBadges;

/// Directory under the platform config dir
const CONFIG_DIR_NAME: &str = "xfchat";

/// Config file name
const CONFIG_FILE_NAME: &str = "lists.toml";

/// Set to `1` to show the message requests banner regardless of the file
pub const MESSAGE_REQUESTS_ENV: &str = "XFCHAT_MESSAGE_REQUESTS";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    lists: ListConfig,
    source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lists(ListConfig::default(), None)
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("No config directory on this platform, using defaults");
            return Self::default();
        };

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let lists = ListConfig::from_toml_str(&text)?;
        tracing::info!("Loaded list config from {}", path.display());

        Ok(Self::from_lists(lists, Some(path.to_path_buf())))
    }

    fn from_lists(mut lists: ListConfig, source: Option<PathBuf>) -> Self {
        if let Some(enabled) = message_requests_override() {
            lists.message_requests_banner = enabled;
        }
        Self { lists, source }
    }

    pub fn lists(&self) -> &ListConfig {
        &self.lists
    }

    /// File the configuration was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Palette selected by the configuration
    pub fn theme(&self) -> Theme {
        Theme::for_variant(self.lists.theme)
    }

    /// Badge predicate built from the configured user IDs
    pub fn badges(&self) -> VerifiedBadges {
        VerifiedBadges::new(self.lists.verified_user_ids.iter().cloned())
    }
}

fn message_requests_override() -> Option<bool> {
    std::env::var(MESSAGE_REQUESTS_ENV)
        .ok()
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
}
