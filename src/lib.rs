//! Pagecraft core: the browser-agnostic half of a prompt-to-page generator.
//!
//! This crate owns the session/chat data model and its persistence format,
//! the completion request/response handling, the output-target instruction
//! table, and the share-link codec. Everything here compiles and tests
//! natively; the Leptos browser shell lives in the `frontend` member.

pub mod completion;
pub mod errors;
pub mod models;
pub mod prompts;
pub mod session;
pub mod share;

pub use completion::{CompletionRequest, CompletionResponse};
pub use errors::{GenerateError, SessionError, ShareDecodeError};
pub use models::{Chat, Message, MessageRole, Session};
pub use prompts::OutputTarget;
