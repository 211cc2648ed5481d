//! Friend Item Component
//!
//! A single row of the friends list: avatar, username with the optional
//! verified badge, and the friendship actions on the right.

use eframe::egui::{self, Align, CornerRadius, Label, Layout, RichText, Sense, UiBuilder};

use super::{avatar, friend_actions};
use crate::egui_app::theme::{styles, Theme};
use crate::shared::messaging::{FriendEvent, FriendRowModel};

/// Badge drawn after verified usernames
pub const VERIFIED_GLYPH: &str = "✔";

/// Render a single friend row.
///
/// Pressing an action label yields `FriendEvent::Action`; pressing anywhere
/// else on the row yields `FriendEvent::RowPressed`.
pub fn render(
    ui: &mut egui::Ui,
    theme: &Theme,
    row: &FriendRowModel,
    avatar_size: f32,
) -> Option<FriendEvent> {
    let desired = egui::vec2(ui.available_width(), styles::row_height(avatar_size));
    let (rect, response) = ui.allocate_exact_size(desired, Sense::click());
    if !ui.is_rect_visible(rect) {
        return None;
    }

    let fill = styles::pressable_fill(
        theme.nav,
        theme.font_color,
        response.hovered(),
        response.is_pointer_button_down_on(),
    );
    ui.painter().rect_filled(rect, CornerRadius::ZERO, fill);

    // Children are laid out after the row itself so they sit on top of it
    // and win the click.
    let content_rect = rect.shrink2(egui::vec2(styles::ROW_PADDING_X, styles::ROW_PADDING_Y));
    let mut content = ui.new_child(
        UiBuilder::new()
            .max_rect(content_rect)
            .layout(Layout::left_to_right(Align::Center)),
    );

    avatar::render(
        &mut content,
        theme,
        &row.avatar_url,
        avatar_size,
        avatar::initial(&row.username),
    );
    content.add_space(styles::AVATAR_GAP);

    let mut action = None;
    content.with_layout(Layout::right_to_left(Align::Center), |ui| {
        action = friend_actions::render(ui, theme, row.relationship);

        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.add(
                Label::new(
                    RichText::new(&row.username)
                        .size(16.0)
                        .strong()
                        .color(theme.font_color),
                )
                .selectable(false)
                .truncate(),
            );
            if row.show_badge {
                ui.label(RichText::new(VERIFIED_GLYPH).color(theme.verified))
                    .on_hover_text("Verified");
            }
        });
    });

    if let Some(action) = action {
        return Some(FriendEvent::Action {
            id: row.id.clone(),
            action,
        });
    }

    response.clicked().then(|| FriendEvent::RowPressed { id: row.id.clone() })
}
