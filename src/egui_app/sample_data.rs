//! Sample Data
//!
//! Upstream-shaped JSON used by the demo binary and the rendering tests.

use crate::shared::error::ListError;
use crate::shared::messaging::{parse_active_chats, ActiveChat, FriendRecord};

pub const SAMPLE_FRIENDS_JSON: &str = r#"[
    {"id": "u-ada", "image": "", "username": "ada", "areFriends": true, "requested": false, "remoteRequested": false},
    {"id": "u-grace", "image": "", "username": "grace", "areFriends": false, "requested": true, "remoteRequested": false},
    {"id": "u-linus", "image": "", "username": "linus", "areFriends": false, "requested": false, "remoteRequested": true},
    {"id": "u-ken", "image": "", "username": "ken", "areFriends": false, "requested": false, "remoteRequested": false}
]"#;

pub const SAMPLE_CHATS_JSON: &str = r#"[
    {"chatType": "individual", "chatProps": {
        "friendshipId": "f-ada", "remoteUserId": "u-ada", "remoteUserImage": "",
        "remoteUsername": "ada", "last_message": "see you at 3 <@u-ken>",
        "last_message_timestamp": "2024-01-01T14:05:00Z", "unread": 1}},
    {"chatType": "collection", "chatProps": {
        "collectionId": "c-builders", "image": "", "name": "Builders",
        "lastMessage": "new mint is live", "lastMessageTimestamp": "2024-01-01T09:12:00Z",
        "lastMessageUuid": "m-2", "lastReadMessage": "m-1"}},
    {"chatType": "individual", "chatProps": {
        "friendshipId": "f-grace", "remoteUserId": "u-grace", "remoteUserImage": "",
        "remoteUsername": "grace", "last_message": "thanks!", "unread": false}},
    {"chatType": "collection", "chatProps": {
        "collectionId": "c-archive", "image": "", "name": "Archive",
        "lastMessage": "", "lastMessageUuid": "m-9", "lastReadMessage": "m-9"}}
]"#;

/// Number of pending message requests in the sample
pub const SAMPLE_REQUEST_COUNT: usize = 2;

pub fn sample_friends() -> Result<Vec<FriendRecord>, ListError> {
    Ok(serde_json::from_str(SAMPLE_FRIENDS_JSON)?)
}

pub fn sample_chats() -> Result<Vec<ActiveChat>, ListError> {
    parse_active_chats(SAMPLE_CHATS_JSON)
}
