//! GraphQL client for the backing store.
//!
//! This module provides a thin GraphQL-over-HTTP client used by the
//! [`MoodStore`](crate::store::MoodStore) façade. A call is a single POST of
//! `{query, variables}` to the configured endpoint, authorized with the
//! admin secret header and bounded by the configured timeout.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GraphqlClient`]: The client with its `execute()` method
//! - [`GraphqlError`]: Error type distinguishing transport failures from
//!   server-reported errors
//! - [`RemoteError`]: A single server-reported error entry
//!
//! # Response Structure
//!
//! The endpoint returns either a `data` payload or a top-level `errors`
//! list. `execute()` returns the `data` payload unmodified on success and
//! fails with [`GraphqlError::Remote`] when the errors list is present.
//! There are no retries; every failure surfaces immediately to the caller.

mod client;
mod errors;

pub use client::{GraphqlClient, ADMIN_SECRET_HEADER, CLIENT_VERSION};
pub use errors::{GraphqlError, RemoteError};
