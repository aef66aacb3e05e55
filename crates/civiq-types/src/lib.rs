pub mod chat;
pub mod date;
pub mod message;
pub mod session;

pub use chat::{ChatSummary, UploadedFile};
pub use date::{date_label, normalize_date};
pub use message::{AuthorRole, MessageRecord};
pub use session::UserSession;
