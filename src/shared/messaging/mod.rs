//! Messaging Module
//!
//! This module contains the view-model types behind the chat lists:
//!
//! - `FriendRecord` - A row of the friends list, with its `Relationship`
//! - `ActiveChat` - An upstream chat record, individual or collection
//! - `ConversationSummary` - A normalized row of the conversation list
//! - `VerifiedBadges` - Which users get the verified badge
//! - `format` - Timestamp, preview and subtitle formatting
//!
//! # Usage
//!
//! ```rust
//! use xfchat_lists::shared::messaging::{parse_active_chats, normalize_chats};
//!
//! let chats = parse_active_chats(r#"[{"chatType":"collection","chatProps":{"collectionId":"c1"}}]"#).unwrap();
//! let rows = normalize_chats(&chats);
//! assert_eq!(rows[0].id, "c1");
//! ```

pub mod active_chat;
pub mod badge;
pub mod conversation;
pub mod format;
pub mod friend;

// Re-export all types
pub use active_chat::{
    parse_active_chats, ActiveChat, CollectionChatProps, IndividualChatProps, RawActiveChat,
};
pub use badge::VerifiedBadges;
pub use conversation::{
    conversation_items, normalize_chats, ChatKind, ConversationEvent, ConversationListEvent,
    ConversationListItem, ConversationSummary, REQUESTS_BANNER_KEY,
};
pub use format::{
    format_clock_time, format_message_preview, format_timestamp, format_timestamp_in,
    request_subtitle, Participant,
};
pub use friend::{friend_rows, FriendAction, FriendEvent, FriendRecord, FriendRowModel, Relationship};
