//! Active Chat Records
//!
//! The subscription backend delivers the chat list as a sequence of
//! `{ "chatType": ..., "chatProps": { ... } }` objects. The props have a
//! different shape for one-to-one chats and for group (collection) chats,
//! including different casing conventions, so each shape gets its own type
//! and [`ActiveChat`] tags them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::conversation::ChatKind;
use crate::shared::error::ListError;

/// Props of a one-to-one chat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualChatProps {
    pub friendship_id: String,
    #[serde(default)]
    pub remote_user_id: Option<String>,
    #[serde(default)]
    pub remote_user_image: Option<String>,
    #[serde(default)]
    pub remote_username: Option<String>,
    #[serde(default, rename = "last_message")]
    pub last_message: Option<String>,
    #[serde(default, rename = "last_message_timestamp")]
    pub last_message_timestamp: Option<String>,
    /// Upstream sends either a boolean or an unread counter
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub unread: bool,
}

/// Props of a group (collection) chat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionChatProps {
    pub collection_id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_timestamp: Option<String>,
    #[serde(default)]
    pub last_message_uuid: Option<String>,
    #[serde(default)]
    pub last_read_message: Option<String>,
}

/// One entry of the upstream chat list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawActiveChat")]
pub enum ActiveChat {
    Individual(IndividualChatProps),
    Collection(CollectionChatProps),
}

impl ActiveChat {
    pub fn kind(&self) -> ChatKind {
        match self {
            ActiveChat::Individual(_) => ChatKind::Individual,
            ActiveChat::Collection(_) => ChatKind::Collection,
        }
    }
}

/// Wire form before the tag is checked
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActiveChat {
    pub chat_type: String,
    #[serde(default)]
    pub chat_props: Value,
}

impl TryFrom<RawActiveChat> for ActiveChat {
    type Error = ListError;

    fn try_from(raw: RawActiveChat) -> Result<Self, Self::Error> {
        match ChatKind::from_tag(&raw.chat_type) {
            Some(ChatKind::Individual) => Ok(ActiveChat::Individual(serde_json::from_value(
                raw.chat_props,
            )?)),
            Some(ChatKind::Collection) => Ok(ActiveChat::Collection(serde_json::from_value(
                raw.chat_props,
            )?)),
            None => Err(ListError::unknown_chat_kind(raw.chat_type)),
        }
    }
}

/// Parse a JSON array of active chat records.
///
/// Fails on the first record whose `chatType` is not recognized, rather than
/// rendering it with the wrong field mapping.
pub fn parse_active_chats(json: &str) -> Result<Vec<ActiveChat>, ListError> {
    let raw: Vec<RawActiveChat> = serde_json::from_str(json)?;
    raw.into_iter().map(ActiveChat::try_from).collect()
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
