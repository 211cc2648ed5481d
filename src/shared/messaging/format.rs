//! Display Formatting
//!
//! String helpers used by the list rows: clock times, message previews and
//! the message requests subtitle.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// `<@userId>` mention token
static MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<@([^<>\s]+)>").expect("mention pattern is valid")
});

/// A chat member that mentions can be resolved against
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub username: String,
}

/// Format a time of day as `h:mm AM/PM`
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format an ISO 8601 timestamp as a clock time in the local timezone.
///
/// Returns an empty string when the timestamp is empty or unparsable.
pub fn format_timestamp(timestamp: &str) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Date-time forms with an explicit offset, tried after RFC 3339
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Date-time forms without an offset
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Format an ISO 8601 timestamp as a clock time in `tz`.
///
/// Accepts RFC 3339, date-times without seconds (with or without an
/// offset), and bare dates. Timestamps without an offset are taken to
/// already be in `tz`; a bare date is midnight UTC.
pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String {
    let timestamp = timestamp.trim();
    if timestamp.is_empty() {
        return String::new();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return format_clock_time(parsed.with_timezone(tz).time());
    }

    // Spell out `Z` so the offset formats below match it
    let with_offset = match timestamp.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => timestamp.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(&with_offset, format) {
            return format_clock_time(parsed.with_timezone(tz).time());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, format) {
            return format_clock_time(naive.time());
        }
    }

    match NaiveDate::parse_from_str(timestamp, "%Y-%m-%d") {
        Ok(date) => {
            let midnight = date.and_time(NaiveTime::MIN).and_utc();
            format_clock_time(midnight.with_timezone(tz).time())
        }
        Err(_) => String::new(),
    }
}

/// Format a raw message for the one-line preview under a conversation name.
///
/// Mentions of known participants become `@username`; unknown ones become
/// `@unknown`. Runs of whitespace, line breaks included, collapse to one space.
pub fn format_message_preview(message: &str, participants: &[Participant]) -> String {
    let resolved = MENTION.replace_all(message, |caps: &Captures| {
        let id = &caps[1];
        match participants.iter().find(|p| p.id == id) {
            Some(p) => format!("@{}", p.username),
            None => "@unknown".to_string(),
        }
    });

    resolved.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Subtitle of the message requests banner
pub fn request_subtitle(request_count: usize) -> String {
    if request_count == 1 {
        "1 person you may know".to_string()
    } else {
        format!("{} people you may know", request_count)
    }
}
