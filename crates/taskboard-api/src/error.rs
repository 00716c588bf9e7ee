//! Request failure surface
//!
//! Every API operation fails with one generic condition. The client
//! deliberately does not distinguish network failure from validation
//! failure from not-found; the variants below exist so the message can
//! carry whatever the transport supplied.

/// A failed request against the task backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, body read, JSON body)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body as supplied by the server, possibly empty
        message: String,
    },

    /// A response record did not match the expected wire shape
    #[error("request failed: could not decode response: {0}")]
    Decode(#[source] serde_json::Error),
}
