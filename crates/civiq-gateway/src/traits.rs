use async_trait::async_trait;
use civiq_types::{ChatSummary, MessageRecord, UploadedFile, UserSession};

use crate::error::Result;
use crate::wire::SendReceipt;

/// Boundary to the remote chat backend.
///
/// Stores depend on this trait rather than on the HTTP client so that state
/// logic can be exercised against an in-memory implementation.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Fetch every chat summary for the session's user, normalized to a flat list.
    async fn list_chats(&self, session: &UserSession) -> Result<Vec<ChatSummary>>;

    /// Server-side title search; result order is the server's relevance order.
    async fn search_chats(&self, session: &UserSession, term: &str) -> Result<Vec<ChatSummary>>;

    async fn pin_chat(&self, session: &UserSession, chat_id: &str) -> Result<()>;

    async fn unpin_chat(&self, session: &UserSession, chat_id: &str) -> Result<()>;

    async fn archive_chat(&self, session: &UserSession, chat_id: &str) -> Result<()>;

    async fn unarchive_chat(&self, session: &UserSession, chat_id: &str) -> Result<()>;

    async fn delete_chat(&self, session: &UserSession, chat_id: &str) -> Result<()>;

    async fn rename_chat(&self, session: &UserSession, chat_id: &str, new_title: &str)
        -> Result<()>;

    /// Ordered transcript for one chat.
    async fn list_messages(&self, session: &UserSession, chat_id: &str)
        -> Result<Vec<MessageRecord>>;

    /// Send a message; a `None` chat id asks the server to create a new chat.
    async fn send_message(
        &self,
        session: &UserSession,
        chat_id: Option<&str>,
        content: &str,
    ) -> Result<SendReceipt>;

    /// Rewrite an earlier message; the server discards everything after it and
    /// regenerates the reply.
    async fn update_message(
        &self,
        session: &UserSession,
        chat_id: &str,
        message_id: &str,
        new_content: &str,
    ) -> Result<()>;

    /// Attach a document to a chat (multipart upload).
    async fn upload_file(
        &self,
        session: &UserSession,
        chat_id: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<()>;

    async fn list_files(&self, session: &UserSession, chat_id: &str) -> Result<Vec<UploadedFile>>;
}
