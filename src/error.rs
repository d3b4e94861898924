use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("CCTPv2 is not supported on {source_chain} or {destination}")]
    UnsupportedChain {
        source_chain: String,
        destination: String,
    },

    #[error("Timeout waiting for attestation after {elapsed_secs} seconds")]
    AttestationTimeout { elapsed_secs: u64 },

    #[error("Attestation not found (will retry)")]
    AttestationNotFound,

    #[error("Rate limit exceeded, retry after {retry_after_seconds} seconds")]
    RateLimitExceeded { retry_after_seconds: u64 },

    #[error("Attestation service error: {0}")]
    Api(String),

    #[error("Invalid USDC amount: {amount}")]
    InvalidAmount { amount: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SolverError>;
