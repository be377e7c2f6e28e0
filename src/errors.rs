use thiserror::Error;

/// Everything that can abort a single generation round. All variants carry a
/// human-readable message for inline display; none are fatal to the app.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("No API key configured. Add one in the settings field above.")]
    MissingApiKey,

    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("HTTP {status}{}", summary_suffix(.summary))]
    Http { status: u16, summary: String },

    #[error("Network error: {0}")]
    Network(String),

    // ── Response errors ──────────────────────────────────────────────────────
    #[error("The model returned an empty completion")]
    EmptyCompletion,
}

/// An empty summary (the remote sent no body) must not leave a dangling
/// colon in the message.
fn summary_suffix(summary: &str) -> String {
    if summary.is_empty() {
        String::new()
    } else {
        format!(": {summary}")
    }
}

impl GenerateError {
    /// Validation failures are shown inline and self-clear after a short
    /// delay; everything else sticks until the next action.
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerateError::EmptyPrompt)
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerateError::MissingApiKey)
    }
}

/// Session store operations on a chat id that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Chat '{id}' not found")]
    UnknownChat { id: String },
}

/// A share token that did not decode. Always swallowed at the call site;
/// never shown to the user.
#[derive(Debug, Clone, Error)]
#[error("Share token did not decode: {0}")]
pub struct ShareDecodeError(pub String);
