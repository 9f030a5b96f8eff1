use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Transport failed: {0}")]
    Transport(String),
    #[error("{tokens} tokens cannot be paired with {records} records")]
    PairingMismatch { tokens: usize, records: usize },
    #[error("No credential for {0}")]
    MissingCredential(String),
    #[error("Unexpected response (status {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
