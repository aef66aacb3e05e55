pub mod config;
pub mod error;
pub mod http;
pub mod traits;
pub mod wire;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use http::HttpChatGateway;
pub use traits::ChatGateway;
pub use wire::SendReceipt;
