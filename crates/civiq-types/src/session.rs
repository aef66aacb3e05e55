use serde::{Deserialize, Serialize};

/// Identity of the active user, passed explicitly to every store and gateway
/// constructor. Every gateway call is scoped by this id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
}

impl UserSession {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
