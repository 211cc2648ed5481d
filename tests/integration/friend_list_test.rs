//! Friend list rendering tests

use assert_matches::assert_matches;
use eframe::egui::pos2;
use xfchat_lists::egui_app::messaging::components::{friend_actions, friend_item};
use xfchat_lists::egui_app::{messaging, Theme};
use xfchat_lists::shared::config::ListConfig;
use xfchat_lists::shared::messaging::{
    FriendAction, FriendEvent, FriendRecord, FriendRowModel, Relationship, VerifiedBadges,
};

use crate::common::{click_at, friend, render_idle};

#[test]
fn test_idle_render_produces_no_event() {
    let theme = Theme::default();
    let config = ListConfig::default();
    let badges = VerifiedBadges::new(["b"]);
    let friends = vec![
        friend("a", true, false, false),
        friend("b", false, true, false),
        friend("c", false, false, true),
        friend("d", false, false, false),
    ];

    let event = render_idle(|ui| messaging::render_friend_list(ui, &theme, &friends, &badges, &config));
    assert_eq!(event, None);
}

#[test]
fn test_empty_list_renders() {
    let theme = Theme::light();
    let config = ListConfig::default();
    let event = render_idle(|ui| {
        messaging::render_friend_list(ui, &theme, &[], &VerifiedBadges::default(), &config)
    });
    assert_eq!(event, None);
}

/// Vertical center of the first row with 28px avatars
const FIRST_ROW_Y: f32 = 34.0;

/// Inside the rightmost action label of a row
const LAST_ACTION_X: f32 = 370.0;

/// Inside "Decline" when a row shows Decline and Accept
const DECLINE_X: f32 = 300.0;

fn click_first_row(x: f32, friends: &[FriendRecord]) -> Option<FriendEvent> {
    let theme = Theme::default();
    let config = ListConfig::default();
    click_at(pos2(x, FIRST_ROW_Y), |ui| {
        messaging::render_friend_list(ui, &theme, friends, &VerifiedBadges::default(), &config)
    })
}

#[test]
fn test_pressing_action_reports_action_kind() {
    let cases = [
        (friend("a", true, false, false), FriendAction::Unfriend),
        (friend("b", false, true, false), FriendAction::CancelRequest),
        (friend("c", false, false, true), FriendAction::Accept),
        (friend("d", false, false, false), FriendAction::SendRequest),
    ];

    for (record, expected) in cases {
        let id = record.id.clone();
        let event = click_first_row(LAST_ACTION_X, &[record]);
        assert_eq!(event, Some(FriendEvent::Action { id, action: expected }));
    }
}

#[test]
fn test_incoming_request_shows_decline_before_accept() {
    let friends = vec![friend("c", false, false, true)];

    assert_eq!(
        click_first_row(DECLINE_X, &friends),
        Some(FriendEvent::Action { id: "c".to_string(), action: FriendAction::Decline })
    );
    assert_eq!(
        click_first_row(LAST_ACTION_X, &friends),
        Some(FriendEvent::Action { id: "c".to_string(), action: FriendAction::Accept })
    );
}

#[test]
fn test_pressing_row_body_reports_row_id() {
    let theme = Theme::default();
    let config = ListConfig::default();
    let friends = vec![friend("first", true, false, false), friend("second", false, false, false)];

    // Over the avatar of the first row, away from the action labels
    let event = click_at(pos2(30.0, 34.0), |ui| {
        messaging::render_friend_list(ui, &theme, &friends, &VerifiedBadges::default(), &config)
    });
    assert_matches!(event, Some(FriendEvent::RowPressed { ref id }) if id == "first");
}

#[test]
fn test_second_row_is_keyed_separately() {
    let theme = Theme::default();
    let config = ListConfig::default();
    let friends = vec![friend("first", true, false, false), friend("second", false, false, false)];

    let event = click_at(pos2(30.0, 82.0), |ui| {
        messaging::render_friend_list(ui, &theme, &friends, &VerifiedBadges::default(), &config)
    });
    assert_eq!(event.as_ref().map(FriendEvent::id), Some("second"));
}

#[test]
fn test_row_and_action_group_render_every_relationship() {
    let theme = Theme::default();
    for relationship in [
        Relationship::Friends,
        Relationship::OutgoingPending,
        Relationship::IncomingPending,
        Relationship::Unrelated,
    ] {
        let row = FriendRowModel {
            id: "x".to_string(),
            avatar_url: String::new(),
            username: "x".to_string(),
            show_badge: true,
            relationship,
        };
        assert_eq!(render_idle(|ui| friend_item::render(ui, &theme, &row, 28.0)), None);
        assert_eq!(render_idle(|ui| friend_actions::render(ui, &theme, relationship)), None);
    }
}

#[test]
fn test_long_list_only_lays_out_visible_rows() {
    let theme = Theme::default();
    let config = ListConfig::default();
    let friends: Vec<_> = (0..200)
        .map(|i| friend(&format!("f{}", i), i % 2 == 0, false, false))
        .collect();

    let event = click_at(pos2(30.0, FIRST_ROW_Y + 48.0 * 5.0), |ui| {
        messaging::render_friend_list(ui, &theme, &friends, &VerifiedBadges::default(), &config)
    });
    assert_matches!(event, Some(FriendEvent::RowPressed { ref id }) if id == "f5");
}
