//! XFChat Lists - Main Library
//!
//! The friends list and conversation list of XFChat, built on egui.
//!
//! # Overview
//!
//! Each list maps upstream records to styled rows and hands the user's
//! presses back to the caller:
//!
//! - Friends list: avatar, username, verified badge, and the friendship
//!   action that fits the relationship (Unfriend, Cancel Request,
//!   Decline/Accept, Send Request)
//! - Conversation list: one-to-one and group chats normalized into one row
//!   shape, with unread highlighting, message preview and clock time
//! - Message requests banner, off unless enabled in configuration
//!
//! # Module Structure
//!
//! - **`shared`** - Toolkit-independent view models
//!   - Friend records, relationships and actions
//!   - Active chat parsing and conversation normalization
//!   - Timestamp and preview formatting
//!   - Configuration and error types
//!
//! - **`egui_app`** - egui components and the demo binary
//!   - Theme passed explicitly to every component
//!   - `ListContainer` over `ScrollArea::show_rows`
//!   - Row and list components
//!
//! # Usage
//!
//! ```rust,no_run
//! use xfchat_lists::egui_app::{messaging, Config};
//! use xfchat_lists::shared::messaging::parse_active_chats;
//!
//! # fn show(ui: &mut eframe::egui::Ui) -> Result<(), xfchat_lists::shared::ListError> {
//! let config = Config::load();
//! let chats = parse_active_chats(r#"[]"#)?;
//! if let Some(event) = messaging::render_conversation_list(ui, &config.theme(), 0, &chats, config.lists()) {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Events
//!
//! egui is immediate mode, so components do not take callbacks. Each render
//! function returns the event produced this frame:
//!
//! - `FriendEvent::RowPressed { id }` / `FriendEvent::Action { id, action }`
//! - `ConversationListEvent::Open(ConversationEvent)` / `ConversationListEvent::RequestsPressed`
//!
//! # Error Handling
//!
//! Rendering is infallible. Parsing upstream JSON and loading configuration
//! return `Result<_, ListError>`; an unrecognized chat kind is an error, not
//! a misrendered row.

/// Shared types and data structures
pub mod shared;

/// egui components and demo app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
