//! Custom error types.

use thiserror::Error;

use crate::{query::QueryError, webvtt::SrtError};

/// A type representing every error returned by `wyzie-subs`. Module
/// specific errors are wrapped; network and decoding failures keep the URL
/// they happened on.
#[derive(Debug, Error)]
pub enum WyzieError {
    /// The search parameters are invalid.
    #[error("Invalid search parameters")]
    Query(#[from] QueryError),

    /// The fetched subtitle is not SubRip.
    #[error("Subtitle conversion failed")]
    Srt(#[from] SrtError),

    /// A subtitle URL given by the caller can't be parsed.
    #[error("Invalid URL '{url}'")]
    Url {
        /// Source error
        source: url::ParseError,
        /// URL we tried to parse
        url: String,
    },

    /// The request could not be sent, or its body could not be read.
    #[error("Request to '{url}' failed")]
    Request {
        /// Source error
        source: reqwest::Error,
        /// Requested URL
        url: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The body is not the expected JSON.
    #[error("Could not decode response from '{url}'")]
    Decode {
        /// Source error
        source: serde_json::Error,
        /// Requested URL
        url: String,
    },
}

impl WyzieError {
    /// HTTP status of a [`WyzieError::Status`] error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Query(_)
            | Self::Srt(_)
            | Self::Url { .. }
            | Self::Request { .. }
            | Self::Decode { .. } => None,
        }
    }
}
