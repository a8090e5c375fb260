//! Configuration types for the mood log client.
//!
//! This module provides the core configuration types used to initialize the
//! client for communication with the backing store's GraphQL API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreConfig`]: The main configuration struct holding all settings
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`EndpointUrl`]: A validated GraphQL endpoint URL newtype
//! - [`AdminSecret`]: A validated admin secret newtype with masked debug output
//!
//! Configuration is explicitly constructed and injected at client
//! construction time; there is no process-wide settings object. A missing
//! endpoint or credential is a startup-time [`ConfigError`], surfaced before
//! any network call is made.
//!
//! # Example
//!
//! ```rust
//! use moodlog::{AdminSecret, EndpointUrl, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .endpoint(EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap())
//!     .admin_secret(AdminSecret::new("my-admin-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AdminSecret, EndpointUrl};

use crate::error::ConfigError;
use std::time::Duration;

/// Default request timeout for calls to the GraphQL endpoint.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the mood log client.
///
/// This struct holds everything needed to reach the backing store: the
/// GraphQL endpoint, the admin secret, and the request timeout.
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. It is read-only after construction.
///
/// # Example
///
/// ```rust
/// use moodlog::{AdminSecret, EndpointUrl, StoreConfig};
///
/// let config = StoreConfig::builder()
///     .endpoint(EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap())
///     .admin_secret(AdminSecret::new("my-admin-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.endpoint().is_https());
/// ```
#[derive(Clone, Debug)]
pub struct StoreConfig {
    endpoint: EndpointUrl,
    admin_secret: AdminSecret,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the admin secret.
    #[must_use]
    pub const fn admin_secret(&self) -> &AdminSecret {
        &self.admin_secret
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// Required fields are `endpoint` and `admin_secret`. The timeout defaults
/// to [`DEFAULT_TIMEOUT`] (15 seconds); the user agent prefix defaults to
/// none.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use moodlog::{AdminSecret, EndpointUrl, StoreConfig};
///
/// let config = StoreConfig::builder()
///     .endpoint(EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap())
///     .admin_secret(AdminSecret::new("secret").unwrap())
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    endpoint: Option<EndpointUrl>,
    admin_secret: Option<AdminSecret>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the admin secret (required).
    #[must_use]
    pub fn admin_secret(mut self, secret: AdminSecret) -> Self {
        self.admin_secret = Some(secret);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the client's `User-Agent` header, identifying the
    /// embedding application (e.g., `"mood-dashboard/2.1"`).
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StoreConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` or
    /// `admin_secret` are not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let admin_secret = self
            .admin_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "admin_secret",
            })?;

        Ok(StoreConfig {
            endpoint,
            admin_secret,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
