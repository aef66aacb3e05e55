//! # Civiq - chat client for a conversational data-exploration assistant
//!
//! Civiq is the client-side state model and HTTP gateway for a chat product:
//! a sidebar of chat sessions (pin, archive, rename, delete, search) plus a
//! transcript view, kept in sync with a remote backend by optimistic updates
//! and reconciliation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use civiq::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = UserSession::new("some-user");
//!     let gateway = Arc::new(HttpChatGateway::new(&GatewayConfig::load()?)?);
//!
//!     let mut chats = ChatListStore::new(session.clone(), gateway.clone());
//!     let mut transcript = TranscriptStore::new(session, gateway);
//!
//!     chats.load().await?;
//!     transcript.send_and_refetch("show turnout by region").await?;
//!     chats.load().await?; // pick up the newly created chat
//!
//!     for group in chats.grouped().regular {
//!         println!("{}: {} chats", group.label, group.chats.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Civiq consists of three composable crates:
//!
//! - **civiq-types**: data model (ChatSummary, MessageRecord, UserSession)
//! - **civiq-gateway**: the backend boundary (ChatGateway trait + reqwest impl)
//! - **civiq-store**: chat-list, search and transcript state machines

pub use civiq_gateway as gateway;
pub use civiq_store as store;
pub use civiq_types as types;

pub mod prelude {
    pub use civiq_gateway::{ChatGateway, GatewayConfig, GatewayError, HttpChatGateway};
    pub use civiq_store::{
        group_chats, ChatListStore, GroupedChats, SearchFilter, StoreError, TranscriptStore,
    };
    pub use civiq_types::{AuthorRole, ChatSummary, MessageRecord, UploadedFile, UserSession};
}
