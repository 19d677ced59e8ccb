// crates/travelog-core/src/error.rs
use thiserror::Error;

/// Errors produced by the travelog client layer.
///
/// Transport failures are kept apart from decoding failures so callers can
/// log them precisely, but the store treats every variant the same way: the
/// operation is rejected and nothing is retried.
#[derive(Debug, Error)]
pub enum TravelogError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[cfg(feature = "http")]
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// An action kind that the reducer does not know about.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A consumer hook was used while no provider was mounted.
    #[error("{0} is used outside the {0}Provider")]
    OutsideProvider(&'static str),
}

pub type Result<T> = std::result::Result<T, TravelogError>;
