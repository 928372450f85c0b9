use thiserror::Error;

/// Normalized failure of a gateway call.
///
/// Every variant displays as a single human-readable message, so callers
/// can render `err.to_string()` without matching on the variant.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network or TLS failure before a response arrived.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A success response whose body did not match the expected shape.
    #[error("{message}")]
    Decode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Required configuration is missing or unusable.
    #[error("{0}")]
    Config(String),

    /// The request was rejected locally before being sent.
    #[error("{0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// HTTP status of the failed response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
