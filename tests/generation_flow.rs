//! End-to-end tests of one generation round at the core level: request
//! assembly, response handling and session bookkeeping, with the transport
//! simulated.

use pagecraft::completion::{error_placeholder, http_error};
use pagecraft::{CompletionRequest, CompletionResponse, Message, OutputTarget, Session};

fn remote_success(content: &str) -> CompletionResponse {
    serde_json::from_value(serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
    .unwrap()
}

#[test]
fn first_round_on_empty_session() {
    let mut session = Session::default();
    let prompt = "Build a login form";

    // No chat is active, so the round starts by creating one.
    assert!(session.active_chat_id.is_none());
    let chat_id = session.create_chat(prompt).id.clone();
    let chat = session.active_chat().unwrap();
    assert_eq!(chat.title, "Build a login form");
    assert!(chat.history.is_empty());

    // The outbound sequence is system + (empty) history + prompt.
    let request = CompletionRequest::build(OutputTarget::Html, &chat.history, prompt);
    assert_eq!(request.messages.len(), 2);

    // Remote succeeds; the round is persisted and the code projected.
    let code = remote_success("<html>...</html>").into_code().unwrap();
    session
        .append_round(&chat_id, Message::user(prompt), Message::assistant(code.clone()))
        .unwrap();

    let chat = session.active_chat().unwrap();
    assert_eq!(
        chat.history,
        vec![
            Message::user("Build a login form"),
            Message::assistant("<html>...</html>"),
        ]
    );
    assert_eq!(code, "<html>...</html>");
    assert_eq!(chat.last_assistant_content(), Some(code.as_str()));
}

#[test]
fn fenced_response_is_cleaned_before_persisting() {
    let code = remote_success("```html\n<html><body>hi</body></html>\n```")
        .into_code()
        .unwrap();
    assert_eq!(code, "<html><body>hi</body></html>");
}

#[test]
fn failed_round_leaves_history_unchanged() {
    let mut session = Session::default();
    session.create_chat("Build a login form");
    let before = session.clone();

    // Remote returns HTTP 500 with body "rate limited": the round is not
    // recorded, and the displayed code becomes a commented placeholder.
    let error = http_error(500, "rate limited");
    assert_eq!(error.to_string(), "HTTP 500: rate limited");
    assert_eq!(
        error_placeholder(&error),
        "<!-- Generation failed: HTTP 500: rate limited -->"
    );
    assert_eq!(session, before);
}

#[test]
fn second_round_replays_prior_history_as_context() {
    let mut session = Session::default();
    let chat_id = session.create_chat("Build a login form").id.clone();
    session
        .append_round(
            &chat_id,
            Message::user("Build a login form"),
            Message::assistant("<html>v1</html>"),
        )
        .unwrap();

    let history = session.chat(&chat_id).unwrap().history.clone();
    let request = CompletionRequest::build(OutputTarget::Html, &history, "Make it dark themed");

    // system, prior user, prior assistant, new user.
    assert_eq!(request.messages.len(), 4);
    assert_eq!(request.messages[1].content, "Build a login form");
    assert_eq!(request.messages[2].content, "<html>v1</html>");
    assert_eq!(request.messages[3].content, "Make it dark themed");
}

#[test]
fn shared_snapshot_page_keeps_stored_chats_intact() {
    let mut stored = Session::default();
    let old_id = stored.create_chat("Pricing page").id.clone();
    stored
        .append_round(
            &old_id,
            Message::user("Pricing page"),
            Message::assistant("<html>pricing</html>"),
        )
        .unwrap();
    let raw = stored.to_json();

    // A page opened on a shared snapshot detaches the active pointer but
    // keeps every stored chat backing the in-memory session.
    let mut session = Session::from_json(&raw).with_cleared_active();
    assert_eq!(session.active_chat_id, None);
    assert_eq!(session.chats.len(), 1);

    // The first mutation on that page persists the whole session; the
    // previously stored chat must come through unharmed.
    session.create_chat("From a share link");
    let persisted = Session::from_json(&session.to_json());
    assert_eq!(persisted.chats.len(), 2);
    let old = persisted.chats.iter().find(|c| c.id == old_id).unwrap();
    assert_eq!(old.last_assistant_content(), Some("<html>pricing</html>"));
}

#[test]
fn persisted_session_survives_a_reload() {
    let mut session = Session::default();
    let chat_id = session.create_chat("Pricing page").id.clone();
    session
        .append_round(
            &chat_id,
            Message::user("Pricing page"),
            Message::assistant("<html>pricing</html>"),
        )
        .unwrap();

    let reloaded = Session::from_json(&session.to_json());
    assert_eq!(reloaded, session);
    assert_eq!(
        reloaded.active_chat().unwrap().last_assistant_content(),
        Some("<html>pricing</html>")
    );
}
