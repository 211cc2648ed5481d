//! Friend List Component
//!
//! Displays the friends list, one `friend_item` row per record, in input order.

use eframe::egui;

use super::friend_item;
use super::list_container::ListContainer;
use crate::egui_app::theme::{styles, Theme};
use crate::shared::config::ListConfig;
use crate::shared::messaging::{friend_rows, FriendEvent, FriendRecord, VerifiedBadges};

/// Render the friends list.
/// Returns the event produced by a row press, if any.
pub fn render(
    ui: &mut egui::Ui,
    theme: &Theme,
    friends: &[FriendRecord],
    badges: &VerifiedBadges,
    config: &ListConfig,
) -> Option<FriendEvent> {
    tracing::debug!("Rendering friend list, friends: {}", friends.len());

    let rows = friend_rows(friends, badges);
    let avatar_size = config.friend_avatar_size;

    let event = ListContainer::new(theme, "friend_list")
        .row_height(styles::row_height(avatar_size))
        .empty_text("No friends yet")
        .show_keyed(
            ui,
            &rows,
            |_, row| row.id.clone(),
            |ui, row| friend_item::render(ui, theme, row, avatar_size),
        );

    match &event {
        Some(FriendEvent::RowPressed { id }) => tracing::info!("Friend row pressed: {}", id),
        Some(FriendEvent::Action { id, action }) => {
            tracing::info!("Friend action {} on {}", action.as_str(), id)
        }
        None => {}
    }
    event
}
