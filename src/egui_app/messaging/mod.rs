//! Messaging Module
//!
//! This module contains the friends list and conversation list components.
//! Every component is a render function over `(&mut egui::Ui, &Theme, ...)`
//! that returns the event the user produced this frame, if any.

pub mod cache;
pub mod components;

pub use components::conversation_list::render as render_conversation_list;
pub use components::friend_list::render as render_friend_list;
pub use components::ListContainer;
