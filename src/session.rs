//! Session store operations.
//!
//! These are pure mutations over [`Session`]; the caller (the browser shell)
//! persists the whole session to storage after every one of them. No-op
//! persistence on startup is deliberate: only mutations write.

use crate::errors::SessionError;
use crate::models::{Chat, Message, Session};

impl Session {
    /// Allocate a new chat for `first_prompt`, prepend it to the list
    /// (most-recent-created-first) and make it active.
    pub fn create_chat(&mut self, first_prompt: &str) -> &Chat {
        let chat = Chat::new(first_prompt);
        self.active_chat_id = Some(chat.id.clone());
        self.chats.insert(0, chat);
        &self.chats[0]
    }

    pub fn chat(&self, id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    pub fn active_chat(&self) -> Option<&Chat> {
        self.active_chat_id.as_deref().and_then(|id| self.chat(id))
    }

    /// Append one completed round (user prompt, assistant reply) to a chat.
    /// A failed round is never recorded, so this is only called on success.
    pub fn append_round(
        &mut self,
        chat_id: &str,
        user: Message,
        assistant: Message,
    ) -> Result<(), SessionError> {
        let chat = self
            .chats
            .iter_mut()
            .find(|c| c.id == chat_id)
            .ok_or_else(|| SessionError::UnknownChat { id: chat_id.to_string() })?;
        chat.history.push(user);
        chat.history.push(assistant);
        Ok(())
    }

    /// Make `chat_id` active and return its history snapshot, oldest first.
    pub fn select_chat(&mut self, chat_id: &str) -> Result<&[Message], SessionError> {
        if self.chat(chat_id).is_none() {
            return Err(SessionError::UnknownChat { id: chat_id.to_string() });
        }
        self.active_chat_id = Some(chat_id.to_string());
        Ok(self.chat(chat_id).map(|c| c.history.as_slice()).unwrap_or_default())
    }

    /// The same session with no chat active. Used when a page opens on a
    /// shared snapshot: every stored chat is kept so later persistence
    /// round-trips them, but the next prompt starts a fresh conversation.
    pub fn with_cleared_active(mut self) -> Self {
        self.active_chat_id = None;
        self
    }

    /// Remove a chat; if it was the active one, clear the active pointer.
    pub fn delete_chat(&mut self, chat_id: &str) {
        self.chats.retain(|c| c.id != chat_id);
        if self.active_chat_id.as_deref() == Some(chat_id) {
            self.active_chat_id = None;
        }
    }
}
