//! Conversation Item Component
//!
//! A single row of the conversation list: avatar, name and message preview
//! on the left, time of the last message on the right. Unread rows get a
//! highlighted background and stronger text.

use eframe::egui::{self, Align, CornerRadius, Label, Layout, RichText, Sense, UiBuilder};

use super::avatar;
use crate::egui_app::messaging::cache;
use crate::egui_app::theme::{styles, Theme};
use crate::shared::messaging::{ConversationEvent, ConversationSummary, Participant};

/// Render a single conversation row.
/// Returns the dispatch event if the row was pressed.
pub fn render(
    ui: &mut egui::Ui,
    theme: &Theme,
    summary: &ConversationSummary,
    participants: &[Participant],
    avatar_size: f32,
) -> Option<ConversationEvent> {
    let desired = egui::vec2(ui.available_width(), styles::row_height(avatar_size));
    let (rect, response) = ui.allocate_exact_size(desired, Sense::click());
    if !ui.is_rect_visible(rect) {
        return None;
    }

    let fill = styles::pressable_fill(
        theme.conversation_background(summary.is_unread),
        theme.font_color,
        response.hovered(),
        response.is_pointer_button_down_on(),
    );
    ui.painter().rect_filled(rect, CornerRadius::ZERO, fill);

    let preview = cache::message_preview(ui.ctx(), &summary.message, participants);
    let time = cache::clock_time(ui.ctx(), &summary.timestamp);
    let text_color = theme.conversation_text(summary.is_unread);

    let content_rect = rect.shrink2(egui::vec2(styles::ROW_PADDING_X, styles::ROW_PADDING_Y));
    let mut content = ui.new_child(
        UiBuilder::new()
            .max_rect(content_rect)
            .layout(Layout::left_to_right(Align::Center)),
    );

    avatar::render(
        &mut content,
        theme,
        &summary.image,
        avatar_size,
        avatar::initial(&summary.name),
    );
    content.add_space(styles::AVATAR_GAP);

    content.with_layout(Layout::right_to_left(Align::Min), |ui| {
        let mut time_text = RichText::new(time).color(theme.text_placeholder);
        if summary.is_unread {
            time_text = time_text.strong();
        }
        ui.add(Label::new(time_text).selectable(false));

        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            let mut name = RichText::new(&summary.name).size(14.0).color(text_color);
            if summary.is_unread {
                name = name.strong();
            }
            ui.add(Label::new(name).selectable(false).truncate());
            ui.add_space(2.0);
            ui.add(
                Label::new(RichText::new(preview).color(text_color))
                    .selectable(false)
                    .truncate(),
            );
        });
    });

    response.clicked().then(|| summary.press_event())
}
