use std::sync::Arc;

use civiq_gateway::ChatGateway;
use civiq_types::{ChatSummary, UserSession};

use crate::error::{Result, StoreError};
use crate::grouping::{group_chats, GroupedChats};
use crate::transcript::TranscriptStore;

enum StatusFlag {
    Pinned,
    Archived,
}

/// Authoritative local collection of chat summaries for one user.
///
/// Mutation operations apply their local change synchronously, before the
/// gateway call is issued, so a rendering layer reflects user intent
/// immediately. When the gateway call fails the pre-mutation state is
/// restored and the error surfaced; on success the store reconciles against
/// the gateway with a fresh `load`, which covers any server-side side effects.
pub struct ChatListStore {
    session: UserSession,
    gateway: Arc<dyn ChatGateway>,
    chats: Vec<ChatSummary>,
    last_error: Option<String>,
}

impl ChatListStore {
    pub fn new(session: UserSession, gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            session,
            gateway,
            chats: Vec::new(),
            last_error: None,
        }
    }

    /// Full collection in canonical (server) order.
    pub fn chats(&self) -> &[ChatSummary] {
        &self.chats
    }

    /// Display view: pinned / archived / date-grouped regular buckets.
    pub fn grouped(&self) -> GroupedChats {
        group_chats(&self.chats)
    }

    /// Message of the most recent failed operation, cleared on the next
    /// successful gateway round trip.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the collection with the gateway's authoritative state.
    ///
    /// On failure the previous collection is kept so the UI stays usable,
    /// if possibly stale.
    pub async fn load(&mut self) -> Result<()> {
        match self.gateway.list_chats(&self.session).await {
            Ok(chats) => {
                tracing::debug!(count = chats.len(), "chat list loaded");
                self.chats = chats;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    pub async fn pin(&mut self, chat_id: &str) -> Result<()> {
        self.set_flag(chat_id, StatusFlag::Pinned, true).await
    }

    pub async fn unpin(&mut self, chat_id: &str) -> Result<()> {
        self.set_flag(chat_id, StatusFlag::Pinned, false).await
    }

    pub async fn archive(&mut self, chat_id: &str) -> Result<()> {
        self.set_flag(chat_id, StatusFlag::Archived, true).await
    }

    pub async fn unarchive(&mut self, chat_id: &str) -> Result<()> {
        self.set_flag(chat_id, StatusFlag::Archived, false).await
    }

    /// Rename a chat. Empty or whitespace-only titles are rejected before any
    /// gateway call. The title is not reconciled with a reload; it stays
    /// client-authoritative until the next `load`.
    pub async fn rename(&mut self, chat_id: &str, new_title: &str) -> Result<()> {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Err(StoreError::Validation(
                "chat title must not be empty".to_string(),
            ));
        }

        let Some(idx) = self.position(chat_id) else {
            return Ok(());
        };
        let previous = std::mem::replace(&mut self.chats[idx].title, new_title.to_string());

        if let Err(e) = self
            .gateway
            .rename_chat(&self.session, chat_id, new_title)
            .await
        {
            self.chats[idx].title = previous;
            self.last_error = Some(e.to_string());
            return Err(e.into());
        }
        self.last_error = None;
        Ok(())
    }

    /// Remove a chat. Deleting an id that is not present is a no-op. When the
    /// deleted chat is selected, selection and transcript clear synchronously,
    /// before the gateway call resolves.
    pub async fn delete(&mut self, chat_id: &str, transcript: &mut TranscriptStore) -> Result<()> {
        let Some(idx) = self.position(chat_id) else {
            return Ok(());
        };
        let removed = self.chats.remove(idx);
        if transcript.selected_chat_id() == Some(chat_id) {
            transcript.clear();
        }

        if let Err(e) = self.gateway.delete_chat(&self.session, chat_id).await {
            let idx = idx.min(self.chats.len());
            self.chats.insert(idx, removed);
            self.last_error = Some(e.to_string());
            return Err(e.into());
        }
        self.load().await
    }

    /// Delete every id concurrently. Individual failures do not cancel the
    /// other calls; the aggregate is reported as a single `Bulk` error and the
    /// store reconciles regardless, so partial completion becomes visible.
    pub async fn bulk_delete(
        &mut self,
        chat_ids: &[String],
        transcript: &mut TranscriptStore,
    ) -> Result<()> {
        transcript.clear();
        let calls = chat_ids
            .iter()
            .map(|id| self.gateway.delete_chat(&self.session, id));
        let results = futures::future::join_all(calls).await;
        self.settle_bulk(results).await
    }

    /// Archive every id concurrently; same aggregate semantics as
    /// `bulk_delete`. Selection clears because the archived section replaces
    /// the regular view the cursor pointed into.
    pub async fn bulk_archive(
        &mut self,
        chat_ids: &[String],
        transcript: &mut TranscriptStore,
    ) -> Result<()> {
        transcript.clear();
        let calls = chat_ids
            .iter()
            .map(|id| self.gateway.archive_chat(&self.session, id));
        let results = futures::future::join_all(calls).await;
        self.settle_bulk(results).await
    }

    async fn settle_bulk(&mut self, results: Vec<civiq_gateway::Result<()>>) -> Result<()> {
        let total = results.len();
        let failed = results.iter().filter(|r| r.is_err()).count();

        // Reconcile before reporting so the view reflects whatever actually
        // completed on the server.
        let reload = self.load().await;
        if failed > 0 {
            tracing::warn!(failed, total, "bulk operation partially failed");
            self.last_error = Some(format!("{} of {} bulk operations failed", failed, total));
            return Err(StoreError::Bulk { failed, total });
        }
        reload
    }

    async fn set_flag(&mut self, chat_id: &str, flag: StatusFlag, value: bool) -> Result<()> {
        let Some(idx) = self.position(chat_id) else {
            return Ok(());
        };
        let previous = match flag {
            StatusFlag::Pinned => std::mem::replace(&mut self.chats[idx].pinned, value),
            StatusFlag::Archived => std::mem::replace(&mut self.chats[idx].archived, value),
        };

        let call = match (&flag, value) {
            (StatusFlag::Pinned, true) => self.gateway.pin_chat(&self.session, chat_id),
            (StatusFlag::Pinned, false) => self.gateway.unpin_chat(&self.session, chat_id),
            (StatusFlag::Archived, true) => self.gateway.archive_chat(&self.session, chat_id),
            (StatusFlag::Archived, false) => self.gateway.unarchive_chat(&self.session, chat_id),
        };

        if let Err(e) = call.await {
            match flag {
                StatusFlag::Pinned => self.chats[idx].pinned = previous,
                StatusFlag::Archived => self.chats[idx].archived = previous,
            }
            self.last_error = Some(e.to_string());
            return Err(e.into());
        }
        self.load().await
    }

    fn position(&self, chat_id: &str) -> Option<usize> {
        self.chats.iter().position(|c| c.chat_id == chat_id)
    }
}
