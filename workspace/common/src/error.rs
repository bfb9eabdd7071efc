use thiserror::Error;

/// Prefix of every user-facing failure message of a submission.
pub const FAILURE_PREFIX: &str = "Failed to predict AQI";

/// The request could not be completed by the transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure of a single prediction round trip
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// The payload could not be encoded as JSON
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// Connectivity failure reported by the transport
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with a non-2xx status
    #[error("API request failed: {status}")]
    Server { status: u16 },

    /// The response body is not valid JSON
    #[error("{0}")]
    Decode(String),
}

impl PredictionError {
    /// The message shown to the user, e.g. `Failed to predict AQI: API request failed: 500`.
    pub fn user_message(&self) -> String {
        format!("{}: {}", FAILURE_PREFIX, self)
    }
}
