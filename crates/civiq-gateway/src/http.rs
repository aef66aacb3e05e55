use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;

use civiq_types::{ChatSummary, MessageRecord, UploadedFile, UserSession};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::traits::ChatGateway;
use crate::wire::{ChatListPayload, FilesEnvelope, SendReceipt};

/// reqwest-backed [`ChatGateway`] implementation.
///
/// All endpoints live under a single base URL and are scoped by the session's
/// `userId` query parameter.
pub struct HttpChatGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Status check shared by all endpoints; non-2xx responses carry the body
    /// text as the error message.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "gateway request ok");
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());
        tracing::error!(%status, %body, "gateway request failed");
        Err(GatewayError::Status { status, body })
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    /// PUT with no body, for the pin/unpin/archive/unarchive family.
    async fn put_status(&self, session: &UserSession, path: &str) -> Result<()> {
        let response = self
            .client
            .put(self.url(path))
            .query(&[("userId", session.user_id.as_str())])
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn list_chats(&self, session: &UserSession) -> Result<Vec<ChatSummary>> {
        let response = self
            .client
            .get(self.url("/chats/all"))
            .query(&[("userId", session.user_id.as_str())])
            .send()
            .await?;
        let payload: ChatListPayload = Self::read_json(response).await?;
        Ok(payload.into_flat())
    }

    async fn search_chats(&self, session: &UserSession, term: &str) -> Result<Vec<ChatSummary>> {
        let response = self
            .client
            .get(self.url("/chats/search"))
            .query(&[("term", term), ("userId", session.user_id.as_str())])
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn pin_chat(&self, session: &UserSession, chat_id: &str) -> Result<()> {
        self.put_status(session, &format!("/chats/{}/pin", chat_id))
            .await
    }

    async fn unpin_chat(&self, session: &UserSession, chat_id: &str) -> Result<()> {
        self.put_status(session, &format!("/chats/{}/unpin", chat_id))
            .await
    }

    async fn archive_chat(&self, session: &UserSession, chat_id: &str) -> Result<()> {
        self.put_status(session, &format!("/chats/{}/archive", chat_id))
            .await
    }

    async fn unarchive_chat(&self, session: &UserSession, chat_id: &str) -> Result<()> {
        self.put_status(session, &format!("/chats/{}/unarchive", chat_id))
            .await
    }

    async fn delete_chat(&self, session: &UserSession, chat_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/chats/{}/delete", chat_id)))
            .query(&[("userId", session.user_id.as_str())])
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn rename_chat(
        &self,
        session: &UserSession,
        chat_id: &str,
        new_title: &str,
    ) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/chats/{}/title", chat_id)))
            .query(&[
                ("userId", session.user_id.as_str()),
                ("newTitle", new_title),
            ])
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn list_messages(
        &self,
        session: &UserSession,
        chat_id: &str,
    ) -> Result<Vec<MessageRecord>> {
        let response = self
            .client
            .get(self.url(&format!("/chats/{}/messages", chat_id)))
            .query(&[("userId", session.user_id.as_str())])
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn send_message(
        &self,
        session: &UserSession,
        chat_id: Option<&str>,
        content: &str,
    ) -> Result<SendReceipt> {
        let body = serde_json::json!({
            "chatId": chat_id,
            "content": content,
        });
        let response = self
            .client
            .post(self.url("/messages/send"))
            .query(&[("userId", session.user_id.as_str())])
            .json(&body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn update_message(
        &self,
        session: &UserSession,
        chat_id: &str,
        message_id: &str,
        new_content: &str,
    ) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/chats/{}/messages/{}", chat_id, message_id)))
            .query(&[
                ("userId", session.user_id.as_str()),
                ("newContent", new_content),
            ])
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn upload_file(
        &self,
        session: &UserSession,
        chat_id: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(&format!("/{}/upload", chat_id)))
            .query(&[("userId", session.user_id.as_str())])
            .multipart(form)
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn list_files(&self, session: &UserSession, chat_id: &str) -> Result<Vec<UploadedFile>> {
        let response = self
            .client
            .get(self.url(&format!("/chats/{}/files", chat_id)))
            .query(&[("userId", session.user_id.as_str())])
            .send()
            .await?;
        let envelope: FilesEnvelope = Self::read_json(response).await?;
        Ok(envelope.files)
    }
}
