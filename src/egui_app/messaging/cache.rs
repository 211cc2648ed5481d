//! Per-frame memoization of row strings
//!
//! Preview and clock strings only change when their inputs change, so they
//! go through egui's `FrameCache` instead of being reformatted every frame.
//! Entries not used during a frame are evicted at the end of it.

use eframe::egui;
use eframe::egui::cache::{ComputerMut, FrameCache};

use crate::shared::messaging::{format_message_preview, format_timestamp, Participant};

#[derive(Default)]
pub struct PreviewFormatter;

impl ComputerMut<(&str, &[Participant]), String> for PreviewFormatter {
    fn compute(&mut self, (message, participants): (&str, &[Participant])) -> String {
        format_message_preview(message, participants)
    }
}

#[derive(Default)]
pub struct ClockFormatter;

impl ComputerMut<&str, String> for ClockFormatter {
    fn compute(&mut self, timestamp: &str) -> String {
        format_timestamp(timestamp)
    }
}

type PreviewCache = FrameCache<String, PreviewFormatter>;
type ClockCache = FrameCache<String, ClockFormatter>;

/// Cached [`format_message_preview`]
pub fn message_preview(ctx: &egui::Context, message: &str, participants: &[Participant]) -> String {
    ctx.memory_mut(|mem| mem.caches.cache::<PreviewCache>().get((message, participants)))
}

/// Cached [`format_timestamp`]
pub fn clock_time(ctx: &egui::Context, timestamp: &str) -> String {
    ctx.memory_mut(|mem| mem.caches.cache::<ClockCache>().get(timestamp))
}
