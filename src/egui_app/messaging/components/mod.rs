//! Chat List UI Components
//!
//! Leaf atoms first (`action_label`, `friend_actions`, `avatar`), then the
//! rows (`friend_item`, `conversation_item`, `request_banner`), then the
//! lists built on `list_container`.

pub mod action_label;
pub mod avatar;
pub mod conversation_item;
pub mod conversation_list;
pub mod friend_actions;
pub mod friend_item;
pub mod friend_list;
pub mod list_container;
pub mod request_banner;

pub use list_container::ListContainer;
