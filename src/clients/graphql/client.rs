//! GraphQL client implementation for the backing store.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! operations against the store's endpoint.

use std::collections::HashMap;

use serde::Deserialize;

use crate::clients::graphql::errors::{GraphqlError, RemoteError};
use crate::config::StoreConfig;

/// Header carrying the admin secret, Hasura-style.
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// Client version advertised in the `User-Agent` header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response envelope returned by the GraphQL endpoint.
#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<RemoteError>>,
}

/// GraphQL client for the backing store.
///
/// Each call is a single HTTP POST of `{query, variables}` to the configured
/// endpoint, authorized with the admin secret header and bounded by the
/// configured timeout. There are no retries and no backoff; a failed call
/// surfaces immediately.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use moodlog::{AdminSecret, EndpointUrl, GraphqlClient, StoreConfig};
/// use serde_json::json;
///
/// let config = StoreConfig::builder()
///     .endpoint(EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap())
///     .admin_secret(AdminSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GraphqlClient::new(&config);
///
/// let data = client
///     .execute(
///         "query List($from: date!) { mood_logs(where: {date: {_gte: $from}}) { pin } }",
///         json!({ "from": "2026-06-01" }),
///     )
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The fully qualified GraphQL endpoint URL.
    endpoint: String,
    /// Default headers included in every request.
    default_headers: HashMap<String, String>,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use moodlog::{AdminSecret, EndpointUrl, GraphqlClient, StoreConfig};
    ///
    /// let config = StoreConfig::builder()
    ///     .endpoint(EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap())
    ///     .admin_secret(AdminSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GraphqlClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or_else(String::new, |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}moodlog/{CLIENT_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            ADMIN_SECRET_HEADER.to_string(),
            config.admin_secret().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes a GraphQL operation and returns its `data` payload.
    ///
    /// The operation is sent as a single POST of `{query, variables}`.
    /// Pass `serde_json::Value::Null` when the operation takes no variables.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Transport`] if the HTTP round trip fails
    /// (network error, timeout, or non-2xx status), and
    /// [`GraphqlError::Remote`] if the response body carries a top-level
    /// `errors` list. On success the `data` payload is returned unmodified.
    pub async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        tracing::debug!(endpoint = %self.endpoint, "executing GraphQL operation");

        let mut request = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request.json(&body).send().await?.error_for_status()?;
        let envelope: GraphqlEnvelope = response.json().await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                tracing::warn!(count = errors.len(), "GraphQL endpoint reported errors");
                return Err(GraphqlError::Remote(errors));
            }
        }

        Ok(envelope.data.unwrap_or(serde_json::Value::Null))
    }
}
