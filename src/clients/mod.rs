//! Client types for communicating with the backing store.
//!
//! This module provides the transport layer used by the higher-level
//! [`store`](crate::store) façade. The only client is the GraphQL one: every
//! interaction with the backing store is a GraphQL operation posted over
//! HTTP.
//!
//! # Overview
//!
//! - [`graphql::GraphqlClient`]: GraphQL-over-HTTP client
//! - [`graphql::GraphqlError`]: Transport vs. server-reported error types

pub mod graphql;

pub use graphql::{GraphqlClient, GraphqlError, RemoteError, ADMIN_SECRET_HEADER};
