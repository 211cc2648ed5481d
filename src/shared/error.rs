//! Shared Error Types
//!
//! This module defines the errors raised while turning upstream data and
//! configuration into list view models. Rendering itself never fails; only
//! parsing and configuration loading return a `Result`.
//!
//! # Error Categories
//!
//! - `UnknownChatKind` - An active chat record carried a `chatType` tag we do not render
//! - `Serialization` - JSON deserialization failures
//! - `Config` - Configuration loading or validation failures
//!
//! # Usage
//!
//! ```rust
//! use xfchat_lists::shared::error::ListError;
//!
//! let error = ListError::unknown_chat_kind("broadcast");
//! assert_eq!(error.to_string(), "Unknown chat kind: 'broadcast'");
//! ```
use thiserror::Error;

use crate::shared::config::ConfigError;

/// Errors produced while preparing list data
#[derive(Debug, Error)]
pub enum ListError {
    /// Upstream chat record had an unrecognized kind tag
    #[error("Unknown chat kind: '{tag}'")]
    UnknownChatKind {
        /// The tag as it appeared on the wire
        tag: String,
    },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ListError {
    /// Create a new unknown chat kind error
    pub fn unknown_chat_kind(tag: impl Into<String>) -> Self {
        Self::UnknownChatKind { tag: tag.into() }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ListError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
