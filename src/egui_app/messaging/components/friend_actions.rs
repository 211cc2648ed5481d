//! Friend Action Group Component
//!
//! The one or two action labels at the end of a friend row.

use eframe::egui;

use super::action_label;
use crate::egui_app::theme::Theme;
use crate::shared::messaging::{FriendAction, Relationship};

/// Render the actions offered for `relationship`.
/// Returns the action that was pressed, if any.
pub fn render(ui: &mut egui::Ui, theme: &Theme, relationship: Relationship) -> Option<FriendAction> {
    let mut pressed = None;

    // Keep reading order when laid out from the right edge
    let mut actions: Vec<FriendAction> = relationship.actions().to_vec();
    if ui.layout().prefer_right_to_left() {
        actions.reverse();
    }

    for action in actions {
        let color = action.is_accent().then_some(theme.blue);
        if action_label::render(ui, theme, action.label(), color) {
            pressed = Some(action);
        }
    }

    pressed
}
