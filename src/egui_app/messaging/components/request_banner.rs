//! Message Requests Banner Component
//!
//! A row summarizing pending message requests. Only drawn when enabled in
//! `ListConfig::message_requests_banner`.

use eframe::egui::{self, Align, Align2, CornerRadius, FontId, Label, Layout, RichText, Sense, UiBuilder};

use crate::egui_app::theme::{styles, Theme};
use crate::shared::messaging::request_subtitle;

pub const BANNER_TITLE: &str = "Message requests";

const BANNER_ICON: &str = "✉";

/// Render the banner. Returns true if it was pressed.
pub fn render(ui: &mut egui::Ui, theme: &Theme, request_count: usize, icon_size: f32) -> bool {
    let desired = egui::vec2(ui.available_width(), styles::row_height(icon_size));
    let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

    let fill = styles::pressable_fill(
        theme.nav,
        theme.font_color,
        response.hovered(),
        response.is_pointer_button_down_on(),
    );
    ui.painter().rect_filled(rect, CornerRadius::ZERO, fill);

    let content_rect = rect.shrink2(egui::vec2(styles::ROW_PADDING_X, styles::ROW_PADDING_Y));
    let mut content = ui.new_child(
        UiBuilder::new()
            .max_rect(content_rect)
            .layout(Layout::left_to_right(Align::Center)),
    );

    let (icon_rect, _) = content.allocate_exact_size(egui::Vec2::splat(icon_size), Sense::hover());
    let painter = content.painter();
    painter.circle_filled(icon_rect.center(), icon_size / 2.0, theme.background);
    painter.text(
        icon_rect.center(),
        Align2::CENTER_CENTER,
        BANNER_ICON,
        FontId::proportional(icon_size / 2.0),
        theme.font_color,
    );
    content.add_space(styles::AVATAR_GAP);

    content.with_layout(Layout::top_down(Align::Min), |ui| {
        ui.add(
            Label::new(RichText::new(BANNER_TITLE).size(14.0).strong().color(theme.font_color))
                .selectable(false),
        );
        ui.add(
            Label::new(RichText::new(request_subtitle(request_count)).color(theme.small_text_color))
                .selectable(false),
        );
    });

    response.clicked()
}
