//! GraphQL-specific error types.
//!
//! This module contains the error type for GraphQL calls against the
//! backing store. Exactly two failure kinds exist, matching the two ways a
//! call can go wrong:
//!
//! - [`GraphqlError::Transport`]: the HTTP round trip itself failed
//!   (connection error, timeout, or a non-2xx status)
//! - [`GraphqlError::Remote`]: the endpoint answered 2xx but reported
//!   errors in the response body's top-level `errors` list
//!
//! Neither kind is retried; a failed call surfaces immediately to the
//! caller, who is expected to present it to the end user.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A single server-reported GraphQL error.
///
/// Hasura-style endpoints return these in the top-level `errors` list of an
/// otherwise successful (HTTP 200) response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RemoteError {
    /// The human-readable error message.
    pub message: String,
    /// The error path within the operation, if reported.
    #[serde(default)]
    pub path: Option<String>,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} (at {path})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Error type for GraphQL operations against the backing store.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The HTTP round trip failed.
    ///
    /// This covers connection errors, timeouts, and non-2xx responses.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint reported errors in the response body.
    ///
    /// The server-reported messages are carried verbatim.
    #[error("GraphQL endpoint reported errors: {}", format_remote_errors(.0))]
    Remote(Vec<RemoteError>),
}

fn format_remote_errors(errors: &[RemoteError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
