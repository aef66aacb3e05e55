use std::sync::Arc;

use chrono::Local;
use civiq_gateway::ChatGateway;
use civiq_types::{AuthorRole, MessageRecord, UploadedFile, UserSession};
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// Ordered transcript of the currently selected chat, plus the selection
/// cursor itself. A `None` selection is the composer's "new chat" state.
pub struct TranscriptStore {
    session: UserSession,
    gateway: Arc<dyn ChatGateway>,
    selected_chat_id: Option<String>,
    messages: Vec<MessageRecord>,
}

impl TranscriptStore {
    pub fn new(session: UserSession, gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            session,
            gateway,
            selected_chat_id: None,
            messages: Vec::new(),
        }
    }

    pub fn selected_chat_id(&self) -> Option<&str> {
        self.selected_chat_id.as_deref()
    }

    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    /// Clear selection and transcript synchronously.
    pub fn clear(&mut self) {
        self.selected_chat_id = None;
        self.messages.clear();
    }

    /// Move the cursor and refetch that chat's transcript; `None` clears both.
    /// On a failed refetch the previous cursor and transcript are kept, so the
    /// displayed messages always belong to the selected chat.
    pub async fn select_chat(&mut self, chat_id: Option<String>) -> Result<()> {
        match chat_id {
            None => {
                self.clear();
                Ok(())
            }
            Some(id) => {
                let previous = self.selected_chat_id.replace(id.clone());
                match self.gateway.list_messages(&self.session, &id).await {
                    Ok(messages) => {
                        self.messages = messages;
                        Ok(())
                    }
                    Err(e) => {
                        self.selected_chat_id = previous;
                        Err(e.into())
                    }
                }
            }
        }
    }

    /// Send a message and refetch the transcript exactly once when the
    /// response arrives.
    ///
    /// The user's own turn is echoed locally before the network round trip so
    /// there is no perceived latency; the echo carries a provisional id and is
    /// replaced wholesale by the refetched transcript. With no selected chat
    /// the server creates one and the cursor moves to the returned id; the
    /// caller should reload its chat list afterwards to pick up the new entry.
    pub async fn send_and_refetch(&mut self, content: &str) -> Result<()> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::Validation(
                "message content must not be empty".to_string(),
            ));
        }

        let now = Local::now();
        self.messages.push(MessageRecord {
            message_id: format!("local-{}", Uuid::new_v4()),
            author: AuthorRole::User,
            content: content.to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
        });

        let chat_id = self.selected_chat_id.clone();
        let receipt = match self
            .gateway
            .send_message(&self.session, chat_id.as_deref(), content)
            .await
        {
            Ok(receipt) => receipt,
            Err(e) => {
                // Drop the echo so the transcript matches what the server has.
                self.messages.pop();
                return Err(e.into());
            }
        };

        self.selected_chat_id = Some(receipt.chat_id.clone());
        self.messages = self
            .gateway
            .list_messages(&self.session, &receipt.chat_id)
            .await?;
        Ok(())
    }

    /// Rewrite an earlier message; the server truncates everything after it
    /// and regenerates, so the transcript is refetched afterwards.
    pub async fn regenerate(&mut self, message_id: &str, new_content: &str) -> Result<()> {
        let chat_id = self.require_selection()?.to_string();
        let new_content = new_content.trim();
        if new_content.is_empty() {
            return Err(StoreError::Validation(
                "message content must not be empty".to_string(),
            ));
        }

        self.gateway
            .update_message(&self.session, &chat_id, message_id, new_content)
            .await?;
        self.messages = self.gateway.list_messages(&self.session, &chat_id).await?;
        Ok(())
    }

    /// Attach a document to the selected chat.
    pub async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<()> {
        let chat_id = self.require_selection()?.to_string();
        self.gateway
            .upload_file(&self.session, &chat_id, filename, bytes)
            .await?;
        Ok(())
    }

    /// Documents attached to the selected chat.
    pub async fn list_files(&self) -> Result<Vec<UploadedFile>> {
        let chat_id = self.require_selection()?.to_string();
        Ok(self.gateway.list_files(&self.session, &chat_id).await?)
    }

    fn require_selection(&self) -> Result<&str> {
        self.selected_chat_id.as_deref().ok_or_else(|| {
            StoreError::Validation("no chat selected".to_string())
        })
    }
}
