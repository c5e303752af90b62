//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Validation failures, missing records and server faults all surface as
/// [`Error::HttpStatus`]; use [`Error::message`] to get the backend's text.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or undecodable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus {
        status: u16,
        body: String,
        /// The `error` or `message` field of a JSON error body, if any.
        message: Option<String>,
    },
}

impl Error {
    /// Human-readable message supplied by the backend, if it sent one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::RequestFailed => None,
            Self::HttpStatus { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
        }
    }
}
