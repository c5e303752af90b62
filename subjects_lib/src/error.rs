//! Error types for the library layer.

use std::fmt;

use crate::messages::MessagesError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding configuration and message catalog failures.
#[derive(Debug)]
pub enum SubjectsError {
    /// An error from the underlying API client.
    Api(subjects_api::Error),
    /// Configuration could not be read or failed validation.
    Config(String),
    /// The localized message catalog could not be loaded.
    Messages(MessagesError),
}

impl fmt::Display for SubjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Config(msg) => write!(f, "Config error: {}", msg),
            Self::Messages(e) => write!(f, "Messages error: {}", e),
        }
    }
}

impl std::error::Error for SubjectsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Messages(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<subjects_api::Error> for SubjectsError {
    fn from(e: subjects_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<MessagesError> for SubjectsError {
    fn from(e: MessagesError) -> Self {
        Self::Messages(e)
    }
}
