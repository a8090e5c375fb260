//! Validated newtype wrappers for configuration values.
//!
//! Both required settings arrive as strings from the outside world, so both
//! get a newtype that validates on construction. A bad value is caught when
//! the configuration is built, never on the first request.

use crate::error::ConfigError;
use std::fmt;

/// A validated GraphQL endpoint URL.
///
/// The backing store's endpoint is a full `http(s)` URL, typically ending
/// in `/v1/graphql`. Validation is deliberately shallow: the scheme must be
/// `http` or `https` and a host must be present. A typo'd path is the
/// server's to reject and comes back as a transport error on the first
/// call.
///
/// # Example
///
/// ```rust
/// use moodlog::EndpointUrl;
///
/// let url = EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap();
/// assert!(url.is_https());
/// assert_eq!(url.as_ref(), "https://example.nhost.run/v1/graphql");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(String);

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// Surrounding whitespace is trimmed off before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL does not
    /// start with `http://` or `https://` or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let has_host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .and_then(|rest| rest.split([':', '/', '?', '#']).next())
            .map_or(false, |host| !host.is_empty());

        if has_host {
            Ok(Self(url))
        } else {
            Err(ConfigError::InvalidEndpointUrl { url })
        }
    }

    /// Returns whether the endpoint is reached over TLS.
    ///
    /// Plain `http` is accepted for local development setups; anything
    /// that carries the admin secret across a network should be `https`.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.0.starts_with("https://")
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated admin secret for the backing store's GraphQL API.
///
/// The secret grants unrestricted access to the store, so this newtype
/// does two things: it rejects blank values at construction time, and it
/// masks the value in debug output so the secret cannot leak through logs.
///
/// # Example
///
/// ```rust
/// use moodlog::AdminSecret;
///
/// let secret = AdminSecret::new("super-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "AdminSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSecret(String);

impl AdminSecret {
    /// Creates a new validated admin secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAdminSecret`] if the secret is empty or
    /// all whitespace.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyAdminSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AdminSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminSecret(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_secret_rejects_empty_string() {
        let result = AdminSecret::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAdminSecret)));
    }

    #[test]
    fn test_admin_secret_rejects_blank_string() {
        let result = AdminSecret::new("   ");
        assert!(matches!(result, Err(ConfigError::EmptyAdminSecret)));
    }

    #[test]
    fn test_admin_secret_masks_value_in_debug() {
        let secret = AdminSecret::new("super-secret-value").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "AdminSecret(*****)");
        assert!(!debug_output.contains("super-secret-value"));
    }

    #[test]
    fn test_endpoint_url_accepts_https_with_path() {
        let url = EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap();
        assert!(url.is_https());
        assert_eq!(url.as_ref(), "https://example.nhost.run/v1/graphql");
    }

    #[test]
    fn test_endpoint_url_accepts_plain_http_with_port() {
        let url = EndpointUrl::new("http://localhost:8080/v1/graphql").unwrap();
        assert!(!url.is_https());
    }

    #[test]
    fn test_endpoint_url_trims_whitespace() {
        let url = EndpointUrl::new("  https://example.nhost.run/v1/graphql  ").unwrap();
        assert_eq!(url.as_ref(), "https://example.nhost.run/v1/graphql");
    }

    #[test]
    fn test_endpoint_url_rejects_invalid() {
        // No scheme
        assert!(EndpointUrl::new("example.nhost.run/v1/graphql").is_err());

        // Unsupported scheme
        assert!(EndpointUrl::new("ws://example.nhost.run/v1/graphql").is_err());

        // Empty host
        assert!(EndpointUrl::new("https://").is_err());
        assert!(EndpointUrl::new("https:///v1/graphql").is_err());
        assert!(EndpointUrl::new("http://:8080/v1/graphql").is_err());
    }

    #[test]
    fn test_rejected_url_is_echoed_back() {
        let result = EndpointUrl::new("ftp://example.com");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpointUrl { url }) if url == "ftp://example.com"
        ));
    }
}
