//! Avatar Component
//!
//! A circular user image. Until the image is loaded, or when there is none,
//! a gray circle with the user's initial is drawn instead.

use eframe::egui::{self, Align2, CornerRadius, FontId, Sense, TextureOptions, Vec2};
use eframe::egui::load::{SizeHint, TexturePoll};

use crate::egui_app::theme::Theme;

/// Render an avatar of diameter `size`.
pub fn render(
    ui: &mut egui::Ui,
    theme: &Theme,
    image_url: &str,
    size: f32,
    initial: Option<char>,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let texture = if image_url.is_empty() {
        None
    } else {
        match ui
            .ctx()
            .try_load_texture(image_url, TextureOptions::LINEAR, SizeHint::default())
        {
            Ok(TexturePoll::Ready { texture }) => Some(texture),
            Ok(TexturePoll::Pending { .. }) => None,
            Err(err) => {
                tracing::trace!("avatar {} unavailable: {}", image_url, err);
                None
            }
        }
    };

    match texture {
        Some(texture) => {
            let radius = (size / 2.0).clamp(0.0, u8::MAX as f32) as u8;
            egui::Image::from_texture(texture)
                .corner_radius(CornerRadius::same(radius))
                .paint_at(ui, rect);
        }
        None => {
            let painter = ui.painter();
            painter.circle_filled(rect.center(), size / 2.0, theme.avatar_fallback);
            if let Some(initial) = initial {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    initial,
                    FontId::proportional(size * 0.45),
                    theme.font_color,
                );
            }
        }
    }

    response
}

/// Uppercased first letter of a name, for the placeholder
pub fn initial(name: &str) -> Option<char> {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
}
