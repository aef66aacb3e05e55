use serde::{Deserialize, Serialize};

/// Author of one transcript turn.
///
/// The observed backend writes `"bot"` for assistant turns; newer payloads use
/// `"assistant"`. Both deserialize to [`AuthorRole::Assistant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant", alias = "bot")]
    Assistant,
}

/// One turn in a chat transcript. Owned by its chat and destroyed with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub message_id: String,
    #[serde(rename = "user")]
    pub author: AuthorRole,
    pub content: String,
    pub date: String,
    pub time: String,
}
