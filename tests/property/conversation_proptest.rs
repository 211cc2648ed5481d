//! Property-based tests for conversation normalization

use proptest::prelude::*;
use xfchat_lists::shared::messaging::{
    conversation_items, normalize_chats, ActiveChat, ChatKind, CollectionChatProps,
    ConversationListItem, IndividualChatProps,
};

fn arb_individual() -> impl Strategy<Value = ActiveChat> {
    (
        "f[a-z0-9]{1,8}",
        proptest::option::of("u[a-z0-9]{1,8}"),
        proptest::option::of("[a-zA-Z]{1,10}"),
        proptest::option::of(".{0,20}"),
        any::<bool>(),
    )
        .prop_map(|(friendship_id, remote_user_id, remote_username, last_message, unread)| {
            ActiveChat::Individual(IndividualChatProps {
                friendship_id,
                remote_user_id,
                remote_user_image: None,
                remote_username,
                last_message,
                last_message_timestamp: None,
                unread,
            })
        })
}

fn arb_collection() -> impl Strategy<Value = ActiveChat> {
    (
        "c[a-z0-9]{1,8}",
        proptest::option::of("[a-zA-Z ]{1,10}"),
        proptest::option::of("m[0-3]"),
        proptest::option::of("m[0-3]"),
    )
        .prop_map(|(collection_id, name, last_message_uuid, last_read_message)| {
            ActiveChat::Collection(CollectionChatProps {
                collection_id,
                image: None,
                name,
                last_message: None,
                last_message_timestamp: None,
                last_message_uuid,
                last_read_message,
            })
        })
}

fn arb_chat() -> impl Strategy<Value = ActiveChat> {
    prop_oneof![arb_individual(), arb_collection()]
}

fn chat_id(chat: &ActiveChat) -> &str {
    match chat {
        ActiveChat::Individual(props) => &props.friendship_id,
        ActiveChat::Collection(props) => &props.collection_id,
    }
}

proptest! {
    #[test]
    fn test_normalize_preserves_order_and_length(
        chats in prop::collection::vec(arb_chat(), 0..30),
    ) {
        let rows = normalize_chats(&chats);
        prop_assert_eq!(rows.len(), chats.len());
        for (row, chat) in rows.iter().zip(&chats) {
            prop_assert_eq!(row.id.as_str(), chat_id(chat));
            prop_assert_eq!(row.kind, chat.kind());
        }
    }

    #[test]
    fn test_missing_timestamps_are_empty(chats in prop::collection::vec(arb_chat(), 0..10)) {
        for row in normalize_chats(&chats) {
            prop_assert!(row.timestamp.is_empty());
        }
    }

    #[test]
    fn test_group_unread_is_uuid_mismatch(chat in arb_collection()) {
        let row = &normalize_chats(std::slice::from_ref(&chat))[0];
        if let ActiveChat::Collection(props) = &chat {
            prop_assert_eq!(row.is_unread, props.last_message_uuid != props.last_read_message);
        }
    }

    #[test]
    fn test_press_event_fields_follow_kind(chat in arb_chat()) {
        let event = normalize_chats(std::slice::from_ref(&chat))[0].press_event();
        match event.kind {
            ChatKind::Individual => {
                prop_assert!(event.remote_user_id.is_some());
                prop_assert_eq!(event.remote_username.as_deref(), Some(event.title.as_str()));
            }
            ChatKind::Collection => {
                prop_assert!(event.remote_user_id.is_none());
                prop_assert!(event.remote_username.is_none());
            }
        }
    }

    #[test]
    fn test_request_count_has_no_effect_without_banner(
        chats in prop::collection::vec(arb_chat(), 0..10),
        request_count in 0usize..100,
    ) {
        prop_assert_eq!(
            conversation_items(&chats, request_count, false),
            conversation_items(&chats, 0, false)
        );
    }

    #[test]
    fn test_banner_only_with_requests(
        chats in prop::collection::vec(arb_chat(), 0..10),
        request_count in 0usize..100,
    ) {
        let items = conversation_items(&chats, request_count, true);
        let has_banner = matches!(items.first(), Some(ConversationListItem::RequestsBanner { .. }));
        prop_assert_eq!(has_banner, request_count > 0);
        prop_assert_eq!(items.len(), chats.len() + usize::from(request_count > 0));
    }
}
