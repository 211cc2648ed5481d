//! Property-based tests for the friends list view models
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use xfchat_lists::shared::messaging::{
    friend_rows, FriendAction, FriendRecord, Relationship, VerifiedBadges,
};

fn arb_friend() -> impl Strategy<Value = FriendRecord> {
    ("[a-z0-9]{1,8}", ".{0,12}", any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(id, username, is_friend, outgoing, incoming)| FriendRecord {
            id,
            avatar_url: String::new(),
            username,
            is_friend,
            outgoing_request_pending: outgoing,
            incoming_request_pending: incoming,
        },
    )
}

proptest! {
    #[test]
    fn test_exactly_one_action_set_by_precedence(
        is_friend in any::<bool>(),
        outgoing in any::<bool>(),
        incoming in any::<bool>(),
    ) {
        let actions = Relationship::from_flags(is_friend, outgoing, incoming).actions();
        let expected: &[FriendAction] = if is_friend {
            &[FriendAction::Unfriend]
        } else if outgoing {
            &[FriendAction::CancelRequest]
        } else if incoming {
            &[FriendAction::Decline, FriendAction::Accept]
        } else {
            &[FriendAction::SendRequest]
        };
        prop_assert_eq!(actions, expected);
    }

    #[test]
    fn test_friend_rows_preserve_order_and_length(
        friends in prop::collection::vec(arb_friend(), 0..40),
    ) {
        let rows = friend_rows(&friends, &VerifiedBadges::default());
        prop_assert_eq!(rows.len(), friends.len());
        for (row, record) in rows.iter().zip(&friends) {
            prop_assert_eq!(&row.id, &record.id);
            prop_assert_eq!(row.relationship, record.relationship());
            prop_assert!(!row.show_badge);
        }
    }

    #[test]
    fn test_badge_follows_id(
        friends in prop::collection::vec(arb_friend(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let chosen = friends[pick.index(friends.len())].id.clone();
        let badges = VerifiedBadges::new([chosen.clone()]);
        for row in friend_rows(&friends, &badges) {
            prop_assert_eq!(row.show_badge, row.id == chosen);
        }
    }
}
