use thiserror::Error;

/// Failure of a liveness probe. Logged, never fatal to other steps.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("{endpoint} returned status {status}")]
    Unhealthy { endpoint: String, status: u16 },

    #[error("{endpoint} unreachable: {detail}")]
    Connection { endpoint: String, detail: String },
}

/// Failure of a functional endpoint. Fatal to any step that consumes the
/// missing output, non-fatal to unrelated steps. The literal status code and
/// raw body are preserved for diagnosis.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response ({detail}): {body}")]
    Malformed { detail: String, body: String },

    #[error("connection error: {0}")]
    Connection(String),
}

impl ApiError {
    /// The HTTP status carried by this error, when a response was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
