//! Friend Record Data Structure
//!
//! Represents one row of the friends list and the actions that can be taken
//! on the relationship it describes.

use serde::{Deserialize, Serialize};

use super::badge::VerifiedBadges;

/// A user shown in the friends list
///
/// The three relationship flags are expected to be mutually exclusive but
/// nothing enforces it; [`FriendRecord::relationship`] resolves overlaps by
/// precedence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendRecord {
    /// User ID of the friend
    pub id: String,
    /// Avatar image URL, empty when the user has none
    #[serde(default, rename = "image", alias = "avatarUrl")]
    pub avatar_url: String,
    /// Display username
    #[serde(default)]
    pub username: String,
    /// We are friends with this user
    #[serde(default, rename = "areFriends", alias = "isFriend")]
    pub is_friend: bool,
    /// We sent a request that is still pending
    #[serde(default, rename = "requested", alias = "outgoingRequestPending")]
    pub outgoing_request_pending: bool,
    /// They sent us a request that is still pending
    #[serde(default, rename = "remoteRequested", alias = "incomingRequestPending")]
    pub incoming_request_pending: bool,
}

impl FriendRecord {
    /// Create a record with no relationship
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            avatar_url: String::new(),
            username: username.into(),
            is_friend: false,
            outgoing_request_pending: false,
            incoming_request_pending: false,
        }
    }

    /// Resolve the relationship flags
    pub fn relationship(&self) -> Relationship {
        Relationship::from_flags(
            self.is_friend,
            self.outgoing_request_pending,
            self.incoming_request_pending,
        )
    }
}

/// Relationship between the current user and a listed user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// Already friends
    Friends,
    /// We asked, they have not answered
    OutgoingPending,
    /// They asked, we have not answered
    IncomingPending,
    /// No relationship yet
    Unrelated,
}

impl Relationship {
    /// Resolve the three flags in precedence order:
    /// friends, then outgoing request, then incoming request.
    pub fn from_flags(is_friend: bool, outgoing_pending: bool, incoming_pending: bool) -> Self {
        if is_friend {
            Relationship::Friends
        } else if outgoing_pending {
            Relationship::OutgoingPending
        } else if incoming_pending {
            Relationship::IncomingPending
        } else {
            Relationship::Unrelated
        }
    }

    /// The actions offered for this relationship, in display order
    pub fn actions(&self) -> &'static [FriendAction] {
        match self {
            Relationship::Friends => &[FriendAction::Unfriend],
            Relationship::OutgoingPending => &[FriendAction::CancelRequest],
            Relationship::IncomingPending => &[FriendAction::Decline, FriendAction::Accept],
            Relationship::Unrelated => &[FriendAction::SendRequest],
        }
    }
}

/// An action on a friendship, as chosen from a friend row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendAction {
    Unfriend,
    CancelRequest,
    Decline,
    Accept,
    SendRequest,
}

impl FriendAction {
    /// Button text
    pub fn label(&self) -> &'static str {
        match self {
            FriendAction::Unfriend => "Unfriend",
            FriendAction::CancelRequest => "Cancel Request",
            FriendAction::Decline => "Decline",
            FriendAction::Accept => "Accept",
            FriendAction::SendRequest => "Send Request",
        }
    }

    /// Whether the label is drawn in the accent color
    pub fn is_accent(&self) -> bool {
        matches!(self, FriendAction::Accept)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FriendAction::Unfriend => "unfriend",
            FriendAction::CancelRequest => "cancel_request",
            FriendAction::Decline => "decline",
            FriendAction::Accept => "accept",
            FriendAction::SendRequest => "send_request",
        }
    }
}

/// What a friend row needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRowModel {
    pub id: String,
    pub avatar_url: String,
    pub username: String,
    pub show_badge: bool,
    pub relationship: Relationship,
}

impl FriendRowModel {
    pub fn new(record: &FriendRecord, badges: &VerifiedBadges) -> Self {
        Self {
            id: record.id.clone(),
            avatar_url: record.avatar_url.clone(),
            username: record.username.clone(),
            show_badge: badges.is_verified(&record.id),
            relationship: record.relationship(),
        }
    }
}

/// Build the rows of the friends list. Order and length follow the input.
pub fn friend_rows(friends: &[FriendRecord], badges: &VerifiedBadges) -> Vec<FriendRowModel> {
    friends
        .iter()
        .map(|record| FriendRowModel::new(record, badges))
        .collect()
}

/// Produced by the friends list when the user presses something
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FriendEvent {
    /// The row body was pressed
    RowPressed { id: String },
    /// One of the action labels was pressed
    Action { id: String, action: FriendAction },
}

impl FriendEvent {
    /// The user the event is about
    pub fn id(&self) -> &str {
        match self {
            FriendEvent::RowPressed { id } | FriendEvent::Action { id, .. } => id,
        }
    }
}
