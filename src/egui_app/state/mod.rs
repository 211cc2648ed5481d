use crate::egui_app::theme::Theme;
use crate::egui_app::{sample_data, Config};
use crate::shared::error::ListError;
use crate::shared::messaging::{
    ActiveChat, ConversationListEvent, FriendAction, FriendEvent, FriendRecord, VerifiedBadges,
};

/// Which list the demo shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTab {
    Friends,
    Chats,
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub theme: Theme,
    pub badges: VerifiedBadges,
    pub friends: Vec<FriendRecord>,
    pub chats: Vec<ActiveChat>,
    pub request_count: usize,
    pub current_tab: ListTab,
    /// Human-readable description of the last event, for the status bar
    pub last_event: Option<String>,
}

impl AppState {
    pub fn new(config: Config, friends: Vec<FriendRecord>, chats: Vec<ActiveChat>, request_count: usize) -> Self {
        Self {
            theme: config.theme(),
            badges: config.badges(),
            config,
            friends,
            chats,
            request_count,
            current_tab: ListTab::Chats,
            last_event: None,
        }
    }

    /// State over the bundled sample data
    pub fn with_sample_data(config: Config) -> Result<Self, ListError> {
        Ok(Self::new(
            config,
            sample_data::sample_friends()?,
            sample_data::sample_chats()?,
            sample_data::SAMPLE_REQUEST_COUNT,
        ))
    }

    pub fn handle_friend_event(&mut self, event: FriendEvent) {
        match event {
            FriendEvent::RowPressed { id } => {
                self.last_event = Some(format!("Opened profile {}", id));
            }
            FriendEvent::Action { id, action } => {
                match self.friends.iter_mut().find(|f| f.id == id) {
                    Some(record) => apply_action_locally(record, action),
                    None => tracing::warn!("Friend action for unknown user {}", id),
                }
                self.last_event = Some(format!("{} → {}", action.label(), id));
            }
        }
    }

    pub fn handle_conversation_event(&mut self, event: ConversationListEvent) {
        self.last_event = Some(match event {
            ConversationListEvent::Open(open) => match open.remote_username {
                Some(username) => format!("Opened chat with {} ({})", username, open.id),
                None => format!("Opened group {} ({})", open.title, open.id),
            },
            ConversationListEvent::RequestsPressed => {
                format!("Opened {} message requests", self.request_count)
            }
        });
    }
}

/// Stand-in for the friendship backend: flip the flags the way a successful
/// request would.
pub fn apply_action_locally(record: &mut FriendRecord, action: FriendAction) {
    match action {
        FriendAction::Unfriend => record.is_friend = false,
        FriendAction::CancelRequest => record.outgoing_request_pending = false,
        FriendAction::Decline => record.incoming_request_pending = false,
        FriendAction::Accept => {
            record.incoming_request_pending = false;
            record.is_friend = true;
        }
        FriendAction::SendRequest => record.outgoing_request_pending = true,
    }
}
