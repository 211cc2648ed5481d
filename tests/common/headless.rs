//! Headless egui harness
//!
//! Runs frames against a bare `egui::Context`, no window needed. Components
//! are rendered inside a `CentralPanel` of a fixed 400x800 screen.

use eframe::egui::{self, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

pub const SCREEN: Vec2 = Vec2::new(400.0, 800.0);

fn raw_input(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
        events,
        ..Default::default()
    }
}

fn run_frame<R>(
    ctx: &egui::Context,
    events: Vec<Event>,
    render: &mut impl FnMut(&mut egui::Ui) -> Option<R>,
) -> Option<R> {
    let mut result = None;
    let _ = ctx.run(raw_input(events), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(event) = render(ui) {
                result = Some(event);
            }
        });
    });
    result
}

/// Render a few frames without input. Returns any event produced.
pub fn render_idle<R>(mut render: impl FnMut(&mut egui::Ui) -> Option<R>) -> Option<R> {
    let ctx = egui::Context::default();
    let mut result = None;
    for _ in 0..3 {
        if let Some(event) = run_frame(&ctx, Vec::new(), &mut render) {
            result = Some(event);
        }
    }
    result
}

/// Move the pointer to `pos`, press and release the primary button.
/// Returns the last event the component produced.
pub fn click_at<R>(pos: Pos2, mut render: impl FnMut(&mut egui::Ui) -> Option<R>) -> Option<R> {
    let ctx = egui::Context::default();
    let button = |pressed| Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    };
    let frames = vec![
        Vec::new(),
        vec![Event::PointerMoved(pos)],
        vec![button(true)],
        vec![button(false)],
        Vec::new(),
    ];

    let mut result = None;
    for events in frames {
        if let Some(event) = run_frame(&ctx, events, &mut render) {
            result = Some(event);
        }
    }
    result
}
