/**
 * egui Native Desktop App - Main Entry Point
 *
 * Shows the friends and conversation lists over sample data, with the
 * configured theme, and logs every event the lists produce.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;
use xfchat_lists::egui_app::theme::styles;
use xfchat_lists::egui_app::{views, AppState, Config};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    let state = match AppState::with_sample_data(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to load sample data: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "XFChat - Lists",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx, &state.theme);
            Ok(Box::new(ListsApp { state }))
        }),
    )
}

/// Main application state
struct ListsApp {
    state: AppState,
}

impl eframe::App for ListsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render_top_bar(ctx, &mut self.state);
        views::render_status_bar(ctx, &self.state);
        views::render_main_panel(ctx, &mut self.state);
    }
}
