//! Wire payloads that differ from the canonical data model.
//!
//! The list-chats endpoint has shipped two shapes over time: a flat array of
//! summaries, and an array of per-date buckets. Both are accepted here and
//! normalized to the flat form so that grouping stays entirely client-side.

use civiq_types::{ChatSummary, UploadedFile};
use serde::Deserialize;

/// Response of the send-message endpoint. `chat_id` is newly assigned when the
/// request carried none; `response` holds the assistant reply when the backend
/// inlines it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReceipt {
    pub chat_id: String,
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ChatListPayload {
    Flat(Vec<ChatSummary>),
    Grouped(Vec<DateBucket>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct DateBucket {
    pub date: String,
    pub chat: Vec<BucketEntry>,
}

/// Entry inside a grouped payload; carries no date of its own and may predate
/// the pinned/archived flags.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BucketEntry {
    pub chat_id: String,
    pub title: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FilesEnvelope {
    pub files: Vec<UploadedFile>,
}

impl ChatListPayload {
    pub(crate) fn into_flat(self) -> Vec<ChatSummary> {
        match self {
            ChatListPayload::Flat(chats) => chats,
            ChatListPayload::Grouped(buckets) => buckets
                .into_iter()
                .flat_map(|bucket| {
                    let date = bucket.date;
                    bucket
                        .chat
                        .into_iter()
                        .map(move |entry| ChatSummary {
                            chat_id: entry.chat_id,
                            title: entry.title,
                            date: date.clone(),
                            pinned: entry.pinned,
                            archived: entry.archived,
                        })
                        .collect::<Vec<_>>()
                })
                .collect(),
        }
    }
}
