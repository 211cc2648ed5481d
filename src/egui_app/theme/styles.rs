//! Theme Styling Functions
//!
//! Frame builders and sizing constants shared by the list components.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::Theme;

/// Corner radius of the list container
pub const LIST_CORNER_RADIUS: u8 = 14;

/// Border width of the list container
pub const LIST_BORDER_WIDTH: f32 = 2.0;

/// Horizontal padding inside a row
pub const ROW_PADDING_X: f32 = 12.0;

/// Vertical padding inside a row
pub const ROW_PADDING_Y: f32 = 10.0;

/// Gap between the avatar and the row text
pub const AVATAR_GAP: f32 = 10.0;

/// Apply the theme to the egui context so panels and scroll bars match the lists
pub fn apply_global_theme(ctx: &egui::Context, theme: &Theme) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.nav;
    style.visuals.window_stroke = Stroke::new(1.0, theme.border_full);
    style.visuals.extreme_bg_color = theme.nav;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, theme.font_color);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, theme.font_color);
    style.visuals.widgets.inactive.bg_fill = theme.nav;
    style.visuals.widgets.hovered.bg_fill = theme.unread_background;
    style.visuals.widgets.active.bg_fill = theme.unread_background;

    style.visuals.selection.bg_fill = theme.unread_background;
    style.visuals.selection.stroke = Stroke::new(1.0, theme.font_color);

    ctx.set_style(style);
}

/// Rounded, bordered chrome around a list
pub fn list_container_frame(theme: &Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.nav)
        .stroke(Stroke::new(LIST_BORDER_WIDTH, theme.border_full))
        .corner_radius(CornerRadius::same(LIST_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(0))
}

/// Row background under the pointer: hovered rows lift toward the text color,
/// pressed rows a bit more.
pub fn pressable_fill(base: Color32, text: Color32, hovered: bool, pressed: bool) -> Color32 {
    if pressed {
        base.lerp_to_gamma(text, 0.12)
    } else if hovered {
        base.lerp_to_gamma(text, 0.06)
    } else {
        base
    }
}

/// Height of a row that holds an avatar of `avatar_size`
pub fn row_height(avatar_size: f32) -> f32 {
    avatar_size + 2.0 * ROW_PADDING_Y
}
