use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gateway returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
