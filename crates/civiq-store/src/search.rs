use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use civiq_gateway::ChatGateway;
use civiq_types::{ChatSummary, UserSession};

use crate::chat_list::ChatListStore;
use crate::error::Result;
use crate::grouping::{group_chats, GroupedChats};

/// Free-text filter over the chat list.
///
/// An empty query exposes the full store collection; a non-empty query
/// delegates to the gateway's search endpoint and uses its result verbatim,
/// keeping relevance ordering authoritative on the server.
///
/// Each invocation draws a ticket from a monotonically increasing sequence;
/// a response whose ticket is no longer the latest issued is discarded, so a
/// slow response for an old query can never clobber a newer one.
pub struct SearchFilter {
    session: UserSession,
    gateway: Arc<dyn ChatGateway>,
    seq: AtomicU64,
    results: Option<Vec<ChatSummary>>,
}

/// Sequence token for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
}

impl SearchFilter {
    pub fn new(session: UserSession, gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            session,
            gateway,
            seq: AtomicU64::new(0),
            results: None,
        }
    }

    /// Whether a non-empty query is currently applied.
    pub fn is_active(&self) -> bool {
        self.results.is_some()
    }

    /// Start a new invocation, invalidating every ticket issued earlier.
    pub fn begin(&self) -> SearchTicket {
        SearchTicket {
            seq: self.seq.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Install a result set if its ticket is still the latest. Returns whether
    /// the result was applied.
    pub fn apply(&mut self, ticket: SearchTicket, results: Vec<ChatSummary>) -> bool {
        if ticket.seq != self.seq.load(Ordering::SeqCst) {
            tracing::debug!(ticket = ticket.seq, "stale search response discarded");
            return false;
        }
        self.results = Some(results);
        true
    }

    /// One query round trip: empty input clears the filter, anything else is
    /// sent to the gateway and applied under the stale-response guard.
    pub async fn search(&mut self, term: &str) -> Result<()> {
        if term.is_empty() {
            self.clear();
            return Ok(());
        }
        let ticket = self.begin();
        let results = self.gateway.search_chats(&self.session, term).await?;
        self.apply(ticket, results);
        Ok(())
    }

    /// Drop the filter; also invalidates any in-flight invocation.
    pub fn clear(&mut self) {
        self.begin();
        self.results = None;
    }

    /// The visible subset: search results when a query is active, the full
    /// store collection otherwise.
    pub fn visible<'a>(&'a self, store: &'a ChatListStore) -> &'a [ChatSummary] {
        match &self.results {
            Some(results) => results,
            None => store.chats(),
        }
    }

    /// Grouped display view of the visible subset.
    pub fn grouped(&self, store: &ChatListStore) -> GroupedChats {
        group_chats(self.visible(store))
    }
}
