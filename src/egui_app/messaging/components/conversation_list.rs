//! Conversation List Component
//!
//! Normalizes the upstream chat records and displays one `conversation_item`
//! row per chat, in input order, keyed by conversation ID.

use eframe::egui;

use super::list_container::ListContainer;
use super::{conversation_item, request_banner};
use crate::egui_app::theme::{styles, Theme};
use crate::shared::config::ListConfig;
use crate::shared::messaging::{
    conversation_items, ActiveChat, ConversationListEvent, ConversationListItem,
};

/// Render the conversation list.
///
/// `request_count` only matters when the message requests banner is enabled.
/// Returns the event produced by a row press, if any.
pub fn render(
    ui: &mut egui::Ui,
    theme: &Theme,
    request_count: usize,
    chats: &[ActiveChat],
    config: &ListConfig,
) -> Option<ConversationListEvent> {
    tracing::debug!(
        "Rendering conversation list, chats: {}, requests: {}",
        chats.len(),
        request_count
    );

    let items = conversation_items(chats, request_count, config.message_requests_banner);
    let avatar_size = config.chat_avatar_size;

    let event = ListContainer::new(theme, "conversation_list")
        .row_height(styles::row_height(avatar_size))
        .empty_text("No conversations yet")
        .show_keyed(
            ui,
            &items,
            |_, item| item.key().to_owned(),
            |ui, item| match item {
                ConversationListItem::RequestsBanner { request_count } => {
                    request_banner::render(ui, theme, *request_count, avatar_size)
                        .then_some(ConversationListEvent::RequestsPressed)
                }
                ConversationListItem::Conversation(summary) => {
                    // No participant roster here, so mentions preview as @unknown
                    conversation_item::render(ui, theme, summary, &[], avatar_size)
                        .map(ConversationListEvent::Open)
                }
            },
        );

    match &event {
        Some(ConversationListEvent::Open(open)) => {
            tracing::info!("Opening {} chat {}", open.kind.as_str(), open.id)
        }
        Some(ConversationListEvent::RequestsPressed) => {
            tracing::info!("Message requests pressed, count: {}", request_count)
        }
        None => {}
    }
    event
}
