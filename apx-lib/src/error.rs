//! Error types for the apx library.

use thiserror::Error;

/// A request was rejected before it reached the network.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("base URL and endpoint must both be provided")]
    MissingTarget,

    #[error("request body is not valid JSON")]
    InvalidJsonBody(#[source] serde_json::Error),
}

/// Transport failures while sending a composed request.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("connection error: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),
}

/// Failures while fetching a spec document.
///
/// A non-success HTTP status is reported as `Network`, the same class as an
/// unreachable host; `status` tells the two apart when a server did answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("{}", network_message(.reason, .status))]
    Network { reason: String, status: Option<u16> },

    #[error("failed to parse response, make sure the URL points to a valid JSON file: {reason}")]
    Parse { reason: String },
}

impl LoadError {
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Network { status, .. } => *status,
            LoadError::Parse { .. } => None,
        }
    }
}

fn network_message(reason: &str, status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("failed to fetch data from URL (server answered HTTP {code}): {reason}"),
        None => format!("failed to fetch data from URL: {reason}"),
    }
}
