use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the vote backend itself.
///
/// On the wire this is an object with exactly one key naming the kind,
/// e.g. `{"NotFound": "Vote record not found"}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

impl VoteError {
    pub fn message(&self) -> &str {
        match self {
            VoteError::NotFound(msg) | VoteError::BadRequest(msg) => msg,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Vote(#[from] VoteError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Error response ({status}): {body}")]
    Http { status: u16, body: String },

    #[error("Malformed {method} answer: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Text shown to the viewer in a tip.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Vote(err) => err.message().to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid backend URL {value}: {source}")]
    BackendUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid refresh interval {0}: expected a positive number of seconds")]
    RefreshInterval(String),
}
