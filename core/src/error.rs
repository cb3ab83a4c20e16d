//! Error types for the todo API client.
//!
//! # Design
//! The server answers 400 for anything the caller can fix and 500 for
//! everything else, including an unknown id. `Rejected` carries the field
//! list of a 400 so callers can show it next to the input; all other
//! non-200 responses land in `Server` with the status and message.

use thiserror::Error;

use crate::types::FieldError;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 400: the request was malformed or failed validation.
    #[error("request rejected: {message}")]
    Rejected {
        message: String,
        fields: Vec<FieldError>,
    },

    /// The server returned any other non-200 status.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
