//! List Container Component
//!
//! Rounded, bordered chrome around a virtualized scroll list. Only the rows
//! in view are laid out (`ScrollArea::show_rows`), so every row must have
//! the same height.

use std::hash::Hash;

use eframe::egui::{self, Id, ScrollArea};

use crate::egui_app::theme::{styles, Theme};

/// Generic list wrapper shared by the friend and conversation lists
pub struct ListContainer<'a> {
    theme: &'a Theme,
    id_salt: Id,
    row_height: f32,
    empty_text: Option<&'a str>,
}

impl<'a> ListContainer<'a> {
    pub fn new(theme: &'a Theme, id_salt: impl Hash) -> Self {
        Self {
            theme,
            id_salt: Id::new(id_salt),
            row_height: styles::row_height(0.0),
            empty_text: None,
        }
    }

    /// Height of every row, spacing excluded
    pub fn row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Text shown instead of rows when there are none
    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = Some(text);
        self
    }

    /// Show `items`, keyed by their index
    pub fn show<T, R>(
        self,
        ui: &mut egui::Ui,
        items: &[T],
        render_item: impl FnMut(&mut egui::Ui, &T) -> Option<R>,
    ) -> Option<R> {
        self.show_keyed(ui, items, |index, _| index, render_item)
    }

    /// Show `items`, giving each row the id scope of `key(index, item)`.
    ///
    /// Returns the last event any visible row produced this frame.
    pub fn show_keyed<T, K, R>(
        self,
        ui: &mut egui::Ui,
        items: &[T],
        key: impl Fn(usize, &T) -> K,
        mut render_item: impl FnMut(&mut egui::Ui, &T) -> Option<R>,
    ) -> Option<R>
    where
        K: Hash,
    {
        let mut event = None;

        styles::list_container_frame(self.theme).show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            if items.is_empty() {
                if let Some(text) = self.empty_text {
                    render_empty_state(ui, self.theme, text);
                }
                return;
            }

            ScrollArea::vertical()
                .id_salt(self.id_salt)
                .auto_shrink([false, false])
                .show_rows(ui, self.row_height, items.len(), |ui, range| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    for (index, item) in items.iter().enumerate().skip(range.start).take(range.len()) {
                        let row_event = ui.push_id(key(index, item), |ui| render_item(ui, item)).inner;
                        if row_event.is_some() {
                            event = row_event;
                        }
                    }
                });
        });

        event
    }
}

fn render_empty_state(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.colored_label(theme.text_placeholder, text);
        ui.add_space(40.0);
    });
}
