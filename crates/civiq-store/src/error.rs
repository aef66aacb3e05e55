use civiq_gateway::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Input rejected before any gateway call was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Aggregate failure of a bulk operation. Calls for other ids may still
    /// have completed; the store reconciles against the gateway regardless.
    #[error("{failed} of {total} bulk operations failed")]
    Bulk { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;
