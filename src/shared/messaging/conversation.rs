//! Conversation Summary
//!
//! The single row shape the conversation list renders. Both upstream chat
//! shapes are normalized into it; see [`ConversationSummary::from`].

use serde::{Deserialize, Serialize};

use super::active_chat::{ActiveChat, CollectionChatProps, IndividualChatProps};

/// Kind of conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    /// One-to-one chat with a friend
    Individual,
    /// Group chat around a collection
    #[serde(alias = "group")]
    Collection,
}

impl ChatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatKind::Individual => "individual",
            ChatKind::Collection => "collection",
        }
    }

    /// Parse a wire tag. `"group"` is accepted for collections.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "individual" => Some(ChatKind::Individual),
            "collection" | "group" => Some(ChatKind::Collection),
            _ => None,
        }
    }
}

/// A conversation as shown in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Friendship ID or collection ID; also the list key
    pub id: String,
    pub kind: ChatKind,
    /// Avatar image URL
    pub image: String,
    /// Remote user for individual chats, `None` for groups
    pub user_id: Option<String>,
    /// Remote username or group name
    pub name: String,
    /// Raw last message, before preview formatting
    pub message: String,
    /// ISO 8601 timestamp of the last message, empty when unknown
    pub timestamp: String,
    pub is_unread: bool,
}

impl From<&IndividualChatProps> for ConversationSummary {
    fn from(props: &IndividualChatProps) -> Self {
        Self {
            id: props.friendship_id.clone(),
            kind: ChatKind::Individual,
            image: props.remote_user_image.clone().unwrap_or_default(),
            user_id: Some(props.remote_user_id.clone().unwrap_or_default()),
            name: props.remote_username.clone().unwrap_or_default(),
            message: props.last_message.clone().unwrap_or_default(),
            timestamp: props.last_message_timestamp.clone().unwrap_or_default(),
            is_unread: props.unread,
        }
    }
}

impl From<&CollectionChatProps> for ConversationSummary {
    fn from(props: &CollectionChatProps) -> Self {
        Self {
            id: props.collection_id.clone(),
            kind: ChatKind::Collection,
            image: props.image.clone().unwrap_or_default(),
            user_id: None,
            name: props.name.clone().unwrap_or_default(),
            message: props.last_message.clone().unwrap_or_default(),
            timestamp: props.last_message_timestamp.clone().unwrap_or_default(),
            is_unread: props.last_message_uuid != props.last_read_message,
        }
    }
}

impl From<&ActiveChat> for ConversationSummary {
    fn from(chat: &ActiveChat) -> Self {
        match chat {
            ActiveChat::Individual(props) => props.into(),
            ActiveChat::Collection(props) => props.into(),
        }
    }
}

impl ConversationSummary {
    /// The event produced when this row is pressed.
    ///
    /// Individual chats carry the remote user; the remote username is the
    /// row title. Group chats carry neither.
    pub fn press_event(&self) -> ConversationEvent {
        match self.kind {
            ChatKind::Individual => ConversationEvent {
                id: self.id.clone(),
                kind: self.kind,
                title: self.name.clone(),
                remote_user_id: Some(self.user_id.clone().unwrap_or_default()),
                remote_username: Some(self.name.clone()),
            },
            ChatKind::Collection => ConversationEvent {
                id: self.id.clone(),
                kind: self.kind,
                title: self.name.clone(),
                remote_user_id: None,
                remote_username: None,
            },
        }
    }
}

/// Normalize upstream chats into list rows, keeping input order
pub fn normalize_chats(chats: &[ActiveChat]) -> Vec<ConversationSummary> {
    chats.iter().map(ConversationSummary::from).collect()
}

/// Dispatched when a conversation row is pressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEvent {
    pub id: String,
    pub kind: ChatKind,
    pub title: String,
    pub remote_user_id: Option<String>,
    pub remote_username: Option<String>,
}

/// Key of the message requests banner row
pub const REQUESTS_BANNER_KEY: &str = "message-requests";

/// A row of the conversation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationListItem {
    /// "Message requests" banner, only shown when enabled
    RequestsBanner { request_count: usize },
    Conversation(ConversationSummary),
}

impl ConversationListItem {
    /// List key: the conversation ID, or a fixed key for the banner
    pub fn key(&self) -> &str {
        match self {
            ConversationListItem::RequestsBanner { .. } => REQUESTS_BANNER_KEY,
            ConversationListItem::Conversation(summary) => &summary.id,
        }
    }
}

/// Build the rows of the conversation list.
///
/// Conversations keep input order. With `show_requests_banner` off the
/// request count has no effect; with it on and a non-zero count the banner
/// is prepended.
pub fn conversation_items(
    chats: &[ActiveChat],
    request_count: usize,
    show_requests_banner: bool,
) -> Vec<ConversationListItem> {
    let banner = (show_requests_banner && request_count > 0)
        .then_some(ConversationListItem::RequestsBanner { request_count });

    banner
        .into_iter()
        .chain(
            chats
                .iter()
                .map(|chat| ConversationListItem::Conversation(chat.into())),
        )
        .collect()
}

/// Produced by the conversation list when the user presses something
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationListEvent {
    /// A conversation row was pressed
    Open(ConversationEvent),
    /// The message requests banner was pressed
    RequestsPressed,
}
