//! Outbound request assembly and response post-processing for the remote
//! chat-completion boundary.

use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;
use crate::models::Message;
use crate::prompts::OutputTarget;

/// The fixed completion endpoint.
pub const COMPLETION_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// The fixed model identifier sent with every request.
pub const MODEL: &str = "openai/gpt-4o-mini";

/// Attribution headers shown on the provider's dashboard; cosmetic only.
pub const REFERER_HEADER: (&str, &str) = ("HTTP-Referer", "https://pagecraft.dev");
pub const TITLE_HEADER: (&str, &str) = ("X-Title", "Pagecraft");

/// How much of a failing response body makes it into the user-visible
/// message before it is elided.
const BODY_SUMMARY_MAX_CHARS: usize = 120;

/// Request body for the completion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: &'static str,
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Assemble the outbound sequence: the target's system instruction,
    /// then the chat's persisted history, then the new user prompt.
    pub fn build(target: OutputTarget, history: &[Message], prompt: &str) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(target.system_instruction()));
        messages.extend_from_slice(history);
        messages.push(Message::user(prompt));
        Self { model: MODEL, messages }
    }
}

/// Successful response body. Only the fields the controller reads are
/// modeled; everything else in the provider payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Extract the single textual completion and clean it. A 2xx response
    /// with no usable content is an [`GenerateError::EmptyCompletion`].
    pub fn into_code(self) -> Result<String, GenerateError> {
        let raw = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(GenerateError::EmptyCompletion)?;
        let cleaned = strip_code_fences(&raw);
        if cleaned.is_empty() {
            return Err(GenerateError::EmptyCompletion);
        }
        Ok(cleaned)
    }
}

/// Compatibility shim: the system instruction forbids markdown fences, but
/// compliance is best-effort. Strips one leading ```` ```lang ```` line and,
/// only if that was present, one trailing ```` ``` ````, then trims
/// whitespace. A reply the heuristic would swallow whole is kept verbatim.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    // Drop the fence line including any language tag.
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body).trim();
    if body.is_empty() {
        trimmed.to_string()
    } else {
        body.to_string()
    }
}

/// Derive the user-visible message for a non-2xx response: status code plus
/// the body up to its first line break, truncated. Raw payloads are never
/// dumped at the user.
pub fn http_error(status: u16, body: &str) -> GenerateError {
    let first_line = body.lines().next().unwrap_or("").trim();
    let summary = if first_line.chars().count() > BODY_SUMMARY_MAX_CHARS {
        let cut: String = first_line.chars().take(BODY_SUMMARY_MAX_CHARS).collect();
        format!("{cut}…")
    } else {
        first_line.to_string()
    };
    GenerateError::Http { status, summary }
}

/// The commented placeholder shown as displayed code after a failed round.
pub fn error_placeholder(error: &GenerateError) -> String {
    // "--" would terminate the comment early.
    let message = error.to_string().replace("--", "- -");
    format!("<!-- Generation failed: {message} -->")
}
