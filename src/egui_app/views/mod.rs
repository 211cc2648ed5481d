use eframe::egui;

use crate::egui_app::messaging;
use crate::egui_app::state::{AppState, ListTab};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let theme = state.theme;
    let frame_style = egui::Frame::default()
        .fill(theme.background)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    theme.font_color,
                    egui::RichText::new("💬 XFChat").size(18.0).strong(),
                );
                ui.add_space(16.0);
                ui.selectable_value(&mut state.current_tab, ListTab::Chats, "Chats");
                ui.selectable_value(&mut state.current_tab, ListTab::Friends, "Friends");
            });
        });
}

pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let theme = state.theme;
    egui::TopBottomPanel::bottom("status_bar")
        .frame(
            egui::Frame::default()
                .fill(theme.background)
                .inner_margin(egui::Margin::symmetric(12, 6)),
        )
        .show(ctx, |ui| {
            let text = state.last_event.as_deref().unwrap_or("Ready");
            ui.colored_label(theme.text_placeholder, text);
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(state.theme.background)
        .inner_margin(egui::Margin::same(12));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_tab {
            ListTab::Friends => {
                let event = messaging::render_friend_list(
                    ui,
                    &state.theme,
                    &state.friends,
                    &state.badges,
                    state.config.lists(),
                );
                if let Some(event) = event {
                    state.handle_friend_event(event);
                }
            }
            ListTab::Chats => {
                let event = messaging::render_conversation_list(
                    ui,
                    &state.theme,
                    state.request_count,
                    &state.chats,
                    state.config.lists(),
                );
                if let Some(event) = event {
                    state.handle_conversation_event(event);
                }
            }
        });
}
