//! Error types for crate configuration.
//!
//! This module contains the error type used by the configuration layer.
//! Configuration problems (a missing endpoint, a missing credential) are
//! startup-time errors: they are surfaced before any network call is made
//! and are never mixed with runtime data errors.
//!
//! # Example
//!
//! ```rust
//! use moodlog::{AdminSecret, ConfigError};
//!
//! let result = AdminSecret::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAdminSecret)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or validating configuration.
///
/// Each variant carries enough context to tell the operator what to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The admin secret cannot be empty.
    #[error("Admin secret cannot be empty. Please provide the store's admin secret.")]
    EmptyAdminSecret,

    /// The GraphQL endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a full URL with scheme (e.g., 'https://example.nhost.run/v1/graphql').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
