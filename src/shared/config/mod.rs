//! List configuration module
//!
//! Provides the configuration types shared by the list components. Loading
//! from disk and environment overrides live in `egui_app::config`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default avatar diameter for friend rows
pub const DEFAULT_FRIEND_AVATAR_SIZE: f32 = 28.0;

/// Default avatar diameter for conversation rows
pub const DEFAULT_CHAT_AVATAR_SIZE: f32 = 48.0;

/// Which palette the lists are drawn with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// List configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Show the "Message requests" banner above the conversation list
    pub message_requests_banner: bool,
    /// User ids that get the verified badge next to their name
    pub verified_user_ids: Vec<String>,
    /// Palette
    pub theme: ThemeVariant,
    pub friend_avatar_size: f32,
    pub chat_avatar_size: f32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            message_requests_banner: false,
            verified_user_ids: Vec::new(),
            theme: ThemeVariant::default(),
            friend_avatar_size: DEFAULT_FRIEND_AVATAR_SIZE,
            chat_avatar_size: DEFAULT_CHAT_AVATAR_SIZE,
        }
    }
}

impl ListConfig {
    /// Create a new ListConfigBuilder
    pub fn builder() -> ListConfigBuilder {
        ListConfigBuilder::default()
    }

    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ListConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for size in [self.friend_avatar_size, self.chat_avatar_size] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::InvalidAvatarSize(size));
            }
        }
        Ok(())
    }
}

/// Builder for ListConfig
#[derive(Debug, Default)]
pub struct ListConfigBuilder {
    message_requests_banner: Option<bool>,
    verified_user_ids: Vec<String>,
    theme: Option<ThemeVariant>,
    friend_avatar_size: Option<f32>,
    chat_avatar_size: Option<f32>,
}

impl ListConfigBuilder {
    /// Enable or disable the message requests banner
    pub fn message_requests_banner(mut self, enabled: bool) -> Self {
        self.message_requests_banner = Some(enabled);
        self
    }

    /// Add a user id that should carry the verified badge
    pub fn verified_user(mut self, id: impl Into<String>) -> Self {
        self.verified_user_ids.push(id.into());
        self
    }

    /// Set the palette
    pub fn theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn friend_avatar_size(mut self, size: f32) -> Self {
        self.friend_avatar_size = Some(size);
        self
    }

    pub fn chat_avatar_size(mut self, size: f32) -> Self {
        self.chat_avatar_size = Some(size);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ListConfig, ConfigError> {
        let defaults = ListConfig::default();
        let config = ListConfig {
            message_requests_banner: self
                .message_requests_banner
                .unwrap_or(defaults.message_requests_banner),
            verified_user_ids: self.verified_user_ids,
            theme: self.theme.unwrap_or(defaults.theme),
            friend_avatar_size: self.friend_avatar_size.unwrap_or(defaults.friend_avatar_size),
            chat_avatar_size: self.chat_avatar_size.unwrap_or(defaults.chat_avatar_size),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid avatar size: {0}")]
    InvalidAvatarSize(f32),
}
