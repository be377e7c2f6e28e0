use serde::{Deserialize, Serialize};

/// Longest chat title, in characters, before the first prompt gets truncated.
pub const TITLE_MAX_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conversational turn. The persisted shape and the remote wire shape
/// are identical, so a single type serves both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: MessageRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Assistant, content: content.into() }
    }
}

/// One conversation thread. The title is derived from the first prompt at
/// creation time and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub title: String,
    pub history: Vec<Message>,
}

impl Chat {
    pub fn new(first_prompt: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: derive_title(first_prompt),
            history: Vec::new(),
        }
    }

    /// Content of the most recent assistant message, if any.
    pub fn last_assistant_content(&self) -> Option<&str> {
        self.history
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
            .map(|m| m.content.as_str())
    }
}

/// Title derivation: the prompt verbatim up to [`TITLE_MAX_CHARS`] characters,
/// else that prefix with an ellipsis. Char-counted so multi-byte prompts
/// never split a code point.
fn derive_title(prompt: &str) -> String {
    if prompt.chars().count() > TITLE_MAX_CHARS {
        format!("{}…", prompt.chars().take(TITLE_MAX_CHARS).collect::<String>())
    } else {
        prompt.to_string()
    }
}

/// The full persisted state: every chat plus which one is active.
/// Serialized as a whole to a single storage key on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub chats: Vec<Chat>,
    pub active_chat_id: Option<String>,
}

impl Session {
    /// Deserialize a persisted session. Malformed data must never crash the
    /// app, so a parse failure degrades to the empty session.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Discarding malformed persisted session: {e}");
                Session::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Serialization of these plain-data types cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_prompt_becomes_title_verbatim() {
        let chat = Chat::new("Build a login form");
        assert_eq!(chat.title, "Build a login form");
    }

    #[test]
    fn exactly_thirty_chars_is_not_truncated() {
        let prompt = "a".repeat(30);
        let chat = Chat::new(&prompt);
        assert_eq!(chat.title, prompt);
    }

    #[test]
    fn long_prompt_is_truncated_with_ellipsis() {
        let prompt = "a".repeat(31);
        let chat = Chat::new(&prompt);
        assert_eq!(chat.title, format!("{}…", "a".repeat(30)));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let prompt = "é".repeat(40);
        let chat = Chat::new(&prompt);
        assert_eq!(chat.title, format!("{}…", "é".repeat(30)));
    }

    #[test]
    fn last_assistant_content_picks_most_recent() {
        let mut chat = Chat::new("p");
        chat.history.push(Message::user("one"));
        chat.history.push(Message::assistant("<p>first</p>"));
        chat.history.push(Message::user("two"));
        chat.history.push(Message::assistant("<p>second</p>"));
        assert_eq!(chat.last_assistant_content(), Some("<p>second</p>"));
    }

    #[test]
    fn session_round_trips_through_json() {
        let mut session = Session::default();
        let chat = Chat::new("hello");
        session.active_chat_id = Some(chat.id.clone());
        session.chats.push(chat);
        let restored = Session::from_json(&session.to_json());
        assert_eq!(restored, session);
    }

    #[test]
    fn malformed_session_json_loads_as_empty() {
        assert_eq!(Session::from_json("{not json"), Session::default());
        assert_eq!(Session::from_json("[1,2,3]"), Session::default());
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
