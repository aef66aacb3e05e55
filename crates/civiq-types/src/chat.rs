use serde::{Deserialize, Serialize};

/// One conversation's metadata as known to the sidebar.
///
/// The gateway is the system of record; a `ChatSummary` held client-side is a
/// cached copy that mutation operations keep in sync via reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    /// Opaque stable identifier, immutable once assigned by the server.
    pub chat_id: String,
    pub title: String,
    /// Creation date as received from the wire ("DD/MM/YYYY" or ISO).
    /// Normalize with [`crate::date::normalize_date`] before comparing.
    pub date: String,
    pub pinned: bool,
    /// Older backend variants omit this field entirely.
    #[serde(default)]
    pub archived: bool,
}

impl ChatSummary {
    pub fn new(chat_id: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            title: title.into(),
            date: date.into(),
            pinned: false,
            archived: false,
        }
    }
}

/// A document attached to a chat via the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub doc_id: String,
    pub filename: String,
    pub file_type: String,
    #[serde(default)]
    pub upload_date: Option<String>,
}
