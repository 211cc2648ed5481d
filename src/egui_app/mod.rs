//! egui Native Desktop App Module
//!
//! This module provides the list components on top of egui, plus the small
//! demo application that exercises them.
//!
//! # Architecture
//!
//! - **`config`** - Configuration loading (file, environment)
//! - **`theme`** - Theme value, palettes and frame builders
//! - **`messaging`** - Friend list and conversation list components
//! - **`state`** - Demo application state
//! - **`views`** - Demo panels
//! - **`sample_data`** - Upstream-shaped sample JSON
//! - **`main`** - Demo entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Demo entry point
//! ├── config.rs       - Configuration management
//! ├── theme/          - Theme, colors, styles
//! ├── messaging/      - List components
//! ├── state/          - Demo state
//! ├── views/          - Demo panels
//! └── sample_data.rs  - Sample JSON
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the demo:
//! // cargo run --bin egui_app
//! ```

pub mod config;
pub mod messaging;
pub mod sample_data;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, ListTab};
pub use theme::Theme;
