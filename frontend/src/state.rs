use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use pagecraft::completion::error_placeholder;
use pagecraft::{share, CompletionRequest, GenerateError, Message, OutputTarget, Session};

use crate::api;
use crate::storage;

/// Displayed code when no chat output is on screen.
pub const DEFAULT_CODE: &str = "<!-- Describe the page you want and press Generate. -->";

/// Displayed code while a completion round is in flight.
pub const GENERATING_CODE: &str = "<!-- Generating… -->";

/// How long a validation error stays on screen.
const VALIDATION_ERROR_MS: u32 = 3_000;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 2_500;

/// Shared application state, provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub session: ReadSignal<Session>,
    pub prompt: ReadSignal<String>,
    pub code: ReadSignal<String>,
    pub is_generating: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    pub toast: ReadSignal<Option<String>>,
    pub target: ReadSignal<OutputTarget>,
    pub sidebar_open: ReadSignal<bool>,
    pub api_key: ReadSignal<String>,

    // --- Write signals (for mutating state) ---
    pub set_session: WriteSignal<Session>,
    pub set_prompt: WriteSignal<String>,
    pub set_code: WriteSignal<String>,
    pub set_is_generating: WriteSignal<bool>,
    pub set_error: WriteSignal<Option<String>>,
    pub set_toast: WriteSignal<Option<String>>,
    pub set_target: WriteSignal<OutputTarget>,
    pub set_sidebar_open: WriteSignal<bool>,
    pub set_api_key: WriteSignal<String>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (session, set_session) = signal(Session::default());
        let (prompt, set_prompt) = signal(String::new());
        let (code, set_code) = signal(DEFAULT_CODE.to_string());
        let (is_generating, set_is_generating) = signal(false);
        let (error, set_error) = signal(None::<String>);
        let (toast, set_toast) = signal(None::<String>);
        let (target, set_target) = signal(OutputTarget::default());
        let (sidebar_open, set_sidebar_open) = signal(true);
        let (api_key, set_api_key) = signal(storage::load_api_key());

        let state = Self {
            session,
            prompt,
            code,
            is_generating,
            error,
            toast,
            target,
            sidebar_open,
            api_key,
            set_session,
            set_prompt,
            set_code,
            set_is_generating,
            set_error,
            set_toast,
            set_target,
            set_sidebar_open,
            set_api_key,
        };

        provide_context(state.clone());
        state
    }

    /// Startup. A share link shows only the shared snapshot: no chat is
    /// created, no history is replayed, and no chat is active. The stored
    /// session still backs the signal, because every later mutation
    /// persists the whole session and must not clobber previously saved
    /// chats. A malformed token is ignored and the normal session load
    /// runs instead.
    pub fn load(&self) {
        let session = storage::load_session();

        if let Some(token) = current_share_token() {
            match share::decode(&token) {
                Ok(shared) => {
                    self.set_session.set(session.with_cleared_active());
                    self.set_code.set(shared);
                    self.show_toast("Shared code loaded");
                    return;
                }
                Err(e) => log::warn!("Ignoring malformed share link: {e}"),
            }
        }

        if let Some(code) = session.active_chat().and_then(|c| c.last_assistant_content()) {
            self.set_code.set(code.to_string());
        }
        self.set_session.set(session);
    }

    /// Start a fresh conversation. The chat itself is created lazily on the
    /// first prompt.
    pub fn new_chat(&self) {
        self.set_session.update(|s| s.active_chat_id = None);
        self.set_code.set(DEFAULT_CODE.to_string());
        self.set_prompt.set(String::new());
        self.set_error.set(None);
        self.persist();
    }

    /// Make a chat active and project its most recent assistant output.
    pub fn select_chat(&self, id: String) {
        let mut selected = false;
        self.set_session.update(|s| selected = s.select_chat(&id).is_ok());
        if !selected {
            return;
        }
        let code = self
            .session
            .get_untracked()
            .active_chat()
            .and_then(|c| c.last_assistant_content())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_CODE.to_string());
        self.set_code.set(code);
        self.set_error.set(None);
        self.persist();
    }

    pub fn delete_chat(&self, id: String) {
        let was_active =
            self.session.get_untracked().active_chat_id.as_deref() == Some(id.as_str());
        self.set_session.update(|s| s.delete_chat(&id));
        if was_active {
            self.set_code.set(DEFAULT_CODE.to_string());
            self.set_prompt.set(String::new());
            self.set_error.set(None);
        }
        self.persist();
    }

    /// Run one generation round: validate, resolve-or-create the active
    /// chat, call the remote boundary with the chat's history as context,
    /// persist the round and project the result.
    pub fn generate(&self) {
        if self.is_generating.get_untracked() {
            // The generate control is disabled while in flight; this guard
            // covers the Enter key path.
            return;
        }

        let api_key = self.api_key.get_untracked();
        if api_key.trim().is_empty() {
            self.set_error.set(Some(GenerateError::MissingApiKey.to_string()));
            return;
        }

        let prompt = self.prompt.get_untracked().trim().to_string();
        if prompt.is_empty() {
            self.flash_error(GenerateError::EmptyPrompt);
            return;
        }

        let chat_id = match self.session.get_untracked().active_chat_id.clone() {
            Some(id) => id,
            None => {
                let mut id = String::new();
                self.set_session.update(|s| id = s.create_chat(&prompt).id.clone());
                self.persist();
                id
            }
        };
        let history = self
            .session
            .get_untracked()
            .chat(&chat_id)
            .map(|c| c.history.clone())
            .unwrap_or_default();
        let request = CompletionRequest::build(self.target.get_untracked(), &history, &prompt);

        self.set_is_generating.set(true);
        self.set_error.set(None);
        self.set_code.set(GENERATING_CODE.to_string());

        let state = self.clone();
        spawn_local(async move {
            match api::request_completion(&api_key, &request).await {
                Ok(code) => {
                    let mut appended = Ok(());
                    state.set_session.update(|s| {
                        appended = s.append_round(
                            &chat_id,
                            Message::user(prompt.clone()),
                            Message::assistant(code.clone()),
                        );
                    });
                    match appended {
                        Ok(()) => state.persist(),
                        // The chat was deleted while the round was in
                        // flight; show the result without recording it.
                        Err(e) => log::warn!("Dropping completed round: {e}"),
                    }
                    state.set_code.set(code);
                    state.set_prompt.set(String::new());
                }
                Err(e) => {
                    log::error!("Generation failed: {e}");
                    state.set_code.set(error_placeholder(&e));
                    state.set_error.set(Some(e.to_string()));
                }
            }
            // Runs on every exit path so a failure can never leave the UI
            // stuck on "Generating…".
            state.set_is_generating.set(false);
        });
    }

    /// Copy a share link for the currently displayed code to the clipboard.
    pub fn share(&self) {
        let code = self.code.get_untracked();
        let Some(base) = page_base_url() else {
            self.show_toast("Sharing is unavailable");
            return;
        };
        let link = format!("{base}{}", share::share_fragment(&code));
        self.copy_to_clipboard(link, "Share link copied");
    }

    pub fn copy_code(&self) {
        self.copy_to_clipboard(self.code.get_untracked(), "Code copied");
    }

    pub fn update_api_key(&self, key: String) {
        storage::save_api_key(&key);
        self.set_api_key.set(key);
    }

    pub fn toggle_sidebar(&self) {
        self.set_sidebar_open.update(|open| *open = !*open);
    }

    pub fn show_toast(&self, message: &str) {
        let message = message.to_string();
        self.set_toast.set(Some(message.clone()));
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            set_toast.update(|t| {
                if t.as_deref() == Some(message.as_str()) {
                    *t = None;
                }
            });
        });
    }

    fn persist(&self) {
        storage::save_session(&self.session.get_untracked());
    }

    /// Validation errors self-clear after a fixed delay; a newer message
    /// shown in the meantime is left alone.
    fn flash_error(&self, error: GenerateError) {
        let message = error.to_string();
        self.set_error.set(Some(message.clone()));
        let set_error = self.set_error;
        spawn_local(async move {
            TimeoutFuture::new(VALIDATION_ERROR_MS).await;
            set_error.update(|e| {
                if e.as_deref() == Some(message.as_str()) {
                    *e = None;
                }
            });
        });
    }

    fn copy_to_clipboard(&self, text: String, success: &'static str) {
        let state = self.clone();
        spawn_local(async move {
            match clipboard_write(&text).await {
                Ok(()) => state.show_toast(success),
                Err(e) => {
                    log::warn!("Clipboard write failed: {e:?}");
                    state.show_toast("Copy failed");
                }
            }
        });
    }
}

fn current_share_token() -> Option<String> {
    let fragment = web_sys::window()?.location().hash().ok()?;
    share::parse_share_fragment(&fragment).map(str::to_string)
}

/// Origin plus path of the current page, without query or fragment.
fn page_base_url() -> Option<String> {
    let location = web_sys::window()?.location();
    let origin = location.origin().ok()?;
    let path = location.pathname().ok()?;
    Some(format!("{origin}{path}"))
}

async fn clipboard_write(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await.map(|_| ())
}
