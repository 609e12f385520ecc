//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so callers can tell "the item does not
//! exist" apart from "the server returned an unexpected status." All other
//! non-2xx responses land in `HttpError` with the raw status code and body for
//! debugging. `Transport` covers everything that went wrong before a response
//! existed at all (refused connection, reset, DNS).
//!
//! The view layer treats every variant the same way: log it and keep state.

use thiserror::Error;

/// Errors produced while building, executing, or parsing a todo API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
