//! Shared Module
//!
//! This module contains the toolkit-independent half of the crate: the view
//! models the lists render, the formatting helpers, configuration types and
//! errors. Nothing here depends on egui, so it can be tested without a UI
//! context.

/// Shared error types
pub mod error;

/// List configuration
pub mod config;

/// Friend and conversation view models
pub mod messaging;

/// Re-export commonly used types for convenience
pub use error::ListError;
pub use config::{ConfigError, ListConfig, ListConfigBuilder, ThemeVariant};
