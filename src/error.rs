use thiserror::Error;

/// Errors raised while reading configuration or transcripts.
///
/// Extraction itself never fails: missing or contradictory evidence ends up
/// as unknown or defaulted fields in the returned record.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid transcript: {0}")]
    InvalidTranscript(#[from] serde_json::Error),

    #[error("unknown extraction mode '{0}' (expected 'document' or 'conversation')")]
    UnknownMode(String),

    #[error("unknown completion policy '{0}' (expected 'strict' or 'lenient')")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
