//! Unit tests for the HTTP reply client

use techbuddy_chat::{ChatError, ChatOptions, HttpReplyService, ReplyService};

#[test]
fn invalid_endpoint_is_rejected_at_construction() {
    let err = HttpReplyService::new("not a url").unwrap_err();
    match err {
        ChatError::InvalidEndpoint(detail) => assert!(detail.contains("not a url")),
        other => panic!("expected InvalidEndpoint, got {other:?}"),
    }
}

#[test]
fn default_options_point_at_the_local_backend() {
    let options = ChatOptions::default();
    assert_eq!(options.endpoint, "http://localhost:5000/api/chat");
    assert_eq!(options.reply_delay.as_millis(), 500);

    let service = HttpReplyService::from_options(&options).unwrap();
    assert_eq!(service.endpoint().as_str(), "http://localhost:5000/api/chat");
}

#[test]
fn unreachable_endpoint_surfaces_as_a_connection_error() {
    // Nothing listens on port 1; the request must fail at the transport level.
    let service = HttpReplyService::new("http://127.0.0.1:1/api/chat").unwrap();
    let err = tokio_test::block_on(service.fetch_reply("hello")).unwrap_err();
    assert!(matches!(err, ChatError::Connection(_)), "got {err:?}");
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        ChatError::Http { status: 503 }.to_string(),
        "reply service returned HTTP 503"
    );
    assert_eq!(
        ChatError::Connection("refused".to_string()).to_string(),
        "connection error: refused"
    );
}
