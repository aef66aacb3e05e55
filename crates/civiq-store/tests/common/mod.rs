#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Local;
use civiq_gateway::{ChatGateway, GatewayError, Result, SendReceipt};
use civiq_types::{AuthorRole, ChatSummary, MessageRecord, UploadedFile, UserSession};

/// In-memory gateway that records every call and can be told to fail
/// specific ones, for exercising store behavior without a network.
#[derive(Default)]
pub struct FakeGateway {
    pub chats: Mutex<Vec<ChatSummary>>,
    pub messages: Mutex<HashMap<String, Vec<MessageRecord>>>,
    pub files: Mutex<HashMap<String, Vec<UploadedFile>>>,
    calls: Mutex<Vec<String>>,
    fail_ops: Mutex<HashSet<String>>,
    next_id: Mutex<u32>,
}

impl FakeGateway {
    pub fn with_chats(chats: Vec<ChatSummary>) -> Arc<Self> {
        let gateway = Self::default();
        *gateway.chats.lock().unwrap() = chats;
        Arc::new(gateway)
    }

    /// Fail calls matching `key`: either an exact call string ("pin a") or an
    /// operation name ("list_chats").
    pub fn fail(&self, key: &str) {
        self.fail_ops.lock().unwrap().insert(key.to_string());
    }

    pub fn clear_failures(&self) {
        self.fail_ops.lock().unwrap().clear();
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call.clone());
        let fails = self.fail_ops.lock().unwrap();
        let op = call.split(' ').next().unwrap_or_default();
        if fails.contains(&call) || fails.contains(op) {
            return Err(GatewayError::Decode(format!("injected failure: {call}")));
        }
        Ok(())
    }

    fn set_flag(&self, chat_id: &str, f: impl Fn(&mut ChatSummary)) {
        let mut chats = self.chats.lock().unwrap();
        if let Some(chat) = chats.iter_mut().find(|c| c.chat_id == chat_id) {
            f(chat);
        }
    }
}

pub fn chat(id: &str, title: &str, date: &str, pinned: bool, archived: bool) -> ChatSummary {
    ChatSummary {
        chat_id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        pinned,
        archived,
    }
}

pub fn message(id: &str, author: AuthorRole, content: &str) -> MessageRecord {
    MessageRecord {
        message_id: id.to_string(),
        author,
        content: content.to_string(),
        date: "2024-06-01".to_string(),
        time: "10:00:00".to_string(),
    }
}

pub fn session() -> UserSession {
    UserSession::new("test-user")
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn list_chats(&self, _session: &UserSession) -> Result<Vec<ChatSummary>> {
        self.record("list_chats".to_string())?;
        Ok(self.chats.lock().unwrap().clone())
    }

    async fn search_chats(&self, _session: &UserSession, term: &str) -> Result<Vec<ChatSummary>> {
        self.record(format!("search {term}"))?;
        let needle = term.to_lowercase();
        Ok(self
            .chats
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn pin_chat(&self, _session: &UserSession, chat_id: &str) -> Result<()> {
        self.record(format!("pin {chat_id}"))?;
        self.set_flag(chat_id, |c| c.pinned = true);
        Ok(())
    }

    async fn unpin_chat(&self, _session: &UserSession, chat_id: &str) -> Result<()> {
        self.record(format!("unpin {chat_id}"))?;
        self.set_flag(chat_id, |c| c.pinned = false);
        Ok(())
    }

    async fn archive_chat(&self, _session: &UserSession, chat_id: &str) -> Result<()> {
        self.record(format!("archive {chat_id}"))?;
        self.set_flag(chat_id, |c| c.archived = true);
        Ok(())
    }

    async fn unarchive_chat(&self, _session: &UserSession, chat_id: &str) -> Result<()> {
        self.record(format!("unarchive {chat_id}"))?;
        self.set_flag(chat_id, |c| c.archived = false);
        Ok(())
    }

    async fn delete_chat(&self, _session: &UserSession, chat_id: &str) -> Result<()> {
        self.record(format!("delete {chat_id}"))?;
        self.chats.lock().unwrap().retain(|c| c.chat_id != chat_id);
        self.messages.lock().unwrap().remove(chat_id);
        Ok(())
    }

    async fn rename_chat(
        &self,
        _session: &UserSession,
        chat_id: &str,
        new_title: &str,
    ) -> Result<()> {
        self.record(format!("rename {chat_id} {new_title}"))?;
        self.set_flag(chat_id, |c| c.title = new_title.to_string());
        Ok(())
    }

    async fn list_messages(
        &self,
        _session: &UserSession,
        chat_id: &str,
    ) -> Result<Vec<MessageRecord>> {
        self.record(format!("list_messages {chat_id}"))?;
        Ok(self
            .messages
            .lock()
            .unwrap()
            .get(chat_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn send_message(
        &self,
        _session: &UserSession,
        chat_id: Option<&str>,
        content: &str,
    ) -> Result<SendReceipt> {
        self.record(format!("send {}", chat_id.unwrap_or("<new>")))?;

        let chat_id = match chat_id {
            Some(id) => id.to_string(),
            None => {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                let id = format!("chat-{}", *next);
                self.chats.lock().unwrap().push(chat(
                    &id,
                    content,
                    &Local::now().format("%d/%m/%Y").to_string(),
                    false,
                    false,
                ));
                id
            }
        };

        let reply = format!("reply to: {content}");
        let mut messages = self.messages.lock().unwrap();
        let transcript = messages.entry(chat_id.clone()).or_default();
        let seq = transcript.len();
        transcript.push(message(&format!("m{seq}"), AuthorRole::User, content));
        transcript.push(message(&format!("m{}", seq + 1), AuthorRole::Assistant, &reply));

        Ok(SendReceipt {
            chat_id,
            response: Some(reply),
        })
    }

    async fn update_message(
        &self,
        _session: &UserSession,
        chat_id: &str,
        message_id: &str,
        new_content: &str,
    ) -> Result<()> {
        self.record(format!("update {chat_id} {message_id}"))?;
        let mut messages = self.messages.lock().unwrap();
        if let Some(transcript) = messages.get_mut(chat_id) {
            if let Some(idx) = transcript.iter().position(|m| m.message_id == message_id) {
                transcript[idx].content = new_content.to_string();
                transcript.truncate(idx + 1);
                let reply = format!("reply to: {new_content}");
                transcript.push(message(
                    &format!("m{}", idx + 1),
                    AuthorRole::Assistant,
                    &reply,
                ));
            }
        }
        Ok(())
    }

    async fn upload_file(
        &self,
        _session: &UserSession,
        chat_id: &str,
        filename: &str,
        _bytes: Vec<u8>,
    ) -> Result<()> {
        self.record(format!("upload {chat_id} {filename}"))?;
        let mut files = self.files.lock().unwrap();
        let list = files.entry(chat_id.to_string()).or_default();
        list.push(UploadedFile {
            doc_id: format!("doc-{}", list.len()),
            filename: filename.to_string(),
            file_type: filename.rsplit('.').next().unwrap_or("bin").to_string(),
            upload_date: None,
        });
        Ok(())
    }

    async fn list_files(&self, _session: &UserSession, chat_id: &str) -> Result<Vec<UploadedFile>> {
        self.record(format!("list_files {chat_id}"))?;
        Ok(self
            .files
            .lock()
            .unwrap()
            .get(chat_id)
            .cloned()
            .unwrap_or_default())
    }
}
