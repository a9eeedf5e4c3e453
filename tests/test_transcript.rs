//! Unit tests for the transcript store
//!
//! Covers append-only ordering, reset-to-seed, and observer notification.

use techbuddy_chat::{ChatEvent, ChatMessage, DeliveryStatus, Role, TranscriptStore};

#[test]
fn append_preserves_insertion_order() {
    let store = TranscriptStore::new();
    store.append(ChatMessage::user("first"));
    store.append(ChatMessage::assistant("second"));
    store.append(ChatMessage::user("third"));

    let messages = store.messages();
    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
}

#[test]
fn appends_extend_the_prior_transcript_as_a_prefix() {
    let store = TranscriptStore::new();
    store.append(ChatMessage::user("a"));
    store.append(ChatMessage::assistant("b"));
    let before: Vec<_> = store.messages().iter().map(|m| m.id).collect();

    store.append(ChatMessage::user("c"));

    let after: Vec<_> = store.messages().iter().map(|m| m.id).collect();
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.len(), before.len() + 1);
}

#[test]
fn reset_leaves_only_the_seed() {
    let store = TranscriptStore::new();
    store.append(ChatMessage::user("old"));
    store.append(ChatMessage::assistant("older"));

    store.reset(ChatMessage::assistant("fresh start"));

    let messages = store.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "fresh start");
    assert_eq!(messages[0].role, Role::Assistant);
}

#[test]
fn append_notifies_subscribers() {
    let store = TranscriptStore::new();
    let mut events = store.subscribe();

    store.append(ChatMessage::user("hello"));

    match events.try_recv() {
        Ok(ChatEvent::MessageAppended(message)) => {
            assert_eq!(message.text, "hello");
            assert_eq!(message.role, Role::User);
        }
        other => panic!("expected MessageAppended, got {other:?}"),
    }
}

#[test]
fn reset_notifies_subscribers_with_the_seed() {
    let store = TranscriptStore::new();
    store.append(ChatMessage::user("gone after reset"));
    let mut events = store.subscribe();

    store.reset(ChatMessage::assistant("seed"));

    match events.try_recv() {
        Ok(ChatEvent::TranscriptReset(seed)) => assert_eq!(seed.text, "seed"),
        other => panic!("expected TranscriptReset, got {other:?}"),
    }
}

#[test]
fn message_ids_are_unique() {
    let a = ChatMessage::user("same text");
    let b = ChatMessage::user("same text");
    assert_ne!(a.id, b.id);
}

#[test]
fn error_constructor_marks_an_assistant_failure_notice() {
    let notice = ChatMessage::error("could not reach the service");
    assert_eq!(notice.role, Role::Assistant);
    assert_eq!(notice.status, DeliveryStatus::Error);

    let ordinary = ChatMessage::assistant("fine");
    assert_eq!(ordinary.status, DeliveryStatus::Sent);
}

#[test]
fn embedded_line_breaks_survive_literally() {
    let store = TranscriptStore::new();
    store.append(ChatMessage::assistant("line one\nline two\n\nline four"));
    assert_eq!(store.messages()[0].text, "line one\nline two\n\nline four");
}
