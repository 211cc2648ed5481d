//! Action Label Component
//!
//! A pressable text label, used for the friendship actions.

use eframe::egui::{self, Color32, CursorIcon, RichText, Sense};

use crate::egui_app::theme::Theme;

/// Font size of action labels
pub const ACTION_FONT_SIZE: f32 = 14.0;

/// Render a pressable label. `color` defaults to the theme's placeholder color.
/// Returns true if the label was pressed.
pub fn render(ui: &mut egui::Ui, theme: &Theme, text: &str, color: Option<Color32>) -> bool {
    let color = color.unwrap_or(theme.text_placeholder);
    let label = egui::Label::new(RichText::new(text).size(ACTION_FONT_SIZE).color(color))
        .selectable(false)
        .sense(Sense::click());

    ui.add(label)
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}
