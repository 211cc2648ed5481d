//! Color Constants for the Chat List Themes
//!
//! Two palettes: the warm brown dark palette (default) and a tan light one.
//! `Theme` picks from these; components never read them directly.

use eframe::egui::Color32;

/// Row and list background - Dark brown
pub const DARK_NAV: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Unread conversation background - Medium brown
pub const DARK_UNREAD_BG: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Primary text - Cream
pub const DARK_FONT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Read conversation text - Light brown
pub const DARK_SMALL_TEXT: Color32 = Color32::from_rgb(0xC6, 0xB2, 0x9E);

/// Muted labels and timestamps
pub const DARK_PLACEHOLDER: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// List border
pub const DARK_BORDER: Color32 = Color32::from_rgb(0x4A, 0x2E, 0x22);

/// Behind icons and badges - Deep brown
pub const DARK_BACKGROUND: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Row and list background - Off-white
pub const LIGHT_NAV: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Unread conversation background - Light tan
pub const LIGHT_UNREAD_BG: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Primary text - Deep brown
pub const LIGHT_FONT: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Read conversation text
pub const LIGHT_SMALL_TEXT: Color32 = Color32::from_rgb(0x5C, 0x4A, 0x3E);

/// Muted labels and timestamps
pub const LIGHT_PLACEHOLDER: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// List border - Muted tan
pub const LIGHT_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Behind icons and badges - Light tan
pub const LIGHT_BACKGROUND: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Accent for the Accept action
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(0x4A, 0x90, 0xE2);

/// Verified badge
pub const VERIFIED: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Avatar placeholder - Gray
pub const AVATAR_FALLBACK: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);
