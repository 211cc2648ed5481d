//! Property-based tests for display formatting

use chrono::{NaiveTime, Utc};
use proptest::prelude::*;
use xfchat_lists::shared::messaging::{
    format_clock_time, format_message_preview, format_timestamp_in, request_subtitle,
};

proptest! {
    #[test]
    fn test_clock_time_is_twelve_hour(hour in 0u32..24, minute in 0u32..60) {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        let twelve = if hour % 12 == 0 { 12 } else { hour % 12 };
        let suffix = if hour < 12 { "AM" } else { "PM" };
        prop_assert_eq!(format_clock_time(time), format!("{}:{:02} {}", twelve, minute, suffix));
    }

    #[test]
    fn test_utc_timestamps_format_their_clock(hour in 0u32..24, minute in 0u32..60) {
        let iso = format!("2024-03-10T{:02}:{:02}:00Z", hour, minute);
        let expected = format_clock_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
        prop_assert_eq!(format_timestamp_in(&iso, &Utc), expected);
    }

    #[test]
    fn test_preview_is_single_line(message in ".{0,80}") {
        let preview = format_message_preview(&message, &[]);
        prop_assert!(!preview.contains('\n'));
        prop_assert_eq!(preview.trim(), preview.as_str());
    }

    #[test]
    fn test_subtitle_plural(count in 2usize..10_000) {
        prop_assert_eq!(request_subtitle(count), format!("{} people you may know", count));
    }
}
