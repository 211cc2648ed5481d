//! Theme Module
//!
//! The list components never reach for global colors. They take a `Theme`
//! value, so the same component can be drawn in either palette and can be
//! rendered in tests without any application state.
//!
//! # Usage
//!
//! ```rust
//! use xfchat_lists::egui_app::theme::{styles, Theme};
//!
//! let theme = Theme::default();
//! let frame = styles::list_container_frame(&theme);
//! # let _ = frame;
//! ```

pub mod colors;
pub mod styles;

use eframe::egui::Color32;

use crate::shared::config::ThemeVariant;

/// Colors used by the list components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Row and list background
    pub nav: Color32,
    /// Background of unread conversation rows
    pub unread_background: Color32,
    /// Primary text
    pub font_color: Color32,
    /// Text of read conversations
    pub small_text_color: Color32,
    /// Muted labels, action labels, timestamps
    pub text_placeholder: Color32,
    /// Accent
    pub blue: Color32,
    /// Verified badge
    pub verified: Color32,
    /// List border
    pub border_full: Color32,
    /// Behind icons
    pub background: Color32,
    /// Avatar placeholder
    pub avatar_fallback: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            nav: colors::DARK_NAV,
            unread_background: colors::DARK_UNREAD_BG,
            font_color: colors::DARK_FONT,
            small_text_color: colors::DARK_SMALL_TEXT,
            text_placeholder: colors::DARK_PLACEHOLDER,
            blue: colors::ACCENT_BLUE,
            verified: colors::VERIFIED,
            border_full: colors::DARK_BORDER,
            background: colors::DARK_BACKGROUND,
            avatar_fallback: colors::AVATAR_FALLBACK,
        }
    }

    pub fn light() -> Self {
        Self {
            nav: colors::LIGHT_NAV,
            unread_background: colors::LIGHT_UNREAD_BG,
            font_color: colors::LIGHT_FONT,
            small_text_color: colors::LIGHT_SMALL_TEXT,
            text_placeholder: colors::LIGHT_PLACEHOLDER,
            blue: colors::ACCENT_BLUE,
            verified: colors::VERIFIED,
            border_full: colors::LIGHT_BORDER,
            background: colors::LIGHT_BACKGROUND,
            avatar_fallback: colors::AVATAR_FALLBACK,
        }
    }

    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Background of a conversation row
    pub fn conversation_background(&self, is_unread: bool) -> Color32 {
        if is_unread {
            self.unread_background
        } else {
            self.nav
        }
    }

    /// Title and preview color of a conversation row
    pub fn conversation_text(&self, is_unread: bool) -> Color32 {
        if is_unread {
            self.font_color
        } else {
            self.small_text_color
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
