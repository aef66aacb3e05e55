pub mod chat_list;
pub mod error;
pub mod grouping;
pub mod search;
pub mod transcript;

pub use chat_list::ChatListStore;
pub use error::{Result, StoreError};
pub use grouping::{group_chats, DateGroup, GroupedChats};
pub use search::{SearchFilter, SearchTicket};
pub use transcript::TranscriptStore;
