//! Error types for the boat-control endpoint.

use thiserror::Error;

/// Errors that can occur when talking to the boat-control endpoint.
#[derive(Debug, Error)]
pub enum BoatError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned invalid status code {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    JsonError(String),

    /// The telemetry coordinate pair does not contain exactly two values.
    #[error("Invalid coordinates provided for this boat ({0:?})")]
    InvalidCoordinates(Vec<f64>),

    /// A telemetry angle is outside its valid range.
    #[error("Invalid {field} in telemetry: {value}")]
    InvalidAngle { field: &'static str, value: i32 },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl BoatError {
    /// Whether the failure came from the transport or endpoint rather than the data.
    pub fn is_transport(&self) -> bool {
        matches!(self, BoatError::HttpError(_) | BoatError::Status { .. })
    }
}
