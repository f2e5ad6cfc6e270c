/// Errors from the records API client layer.
use thiserror::Error;

/// Typed errors from the remote record store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client itself could not be constructed.
    #[error("could not build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The server could not be reached at all.
    #[error("could not reach {url}: {source}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body, as far as it could be read.
        body: String,
    },

    /// The response body was not valid records JSON.
    #[error("invalid response from server: {0}")]
    Decode(#[source] reqwest::Error),
}
