//! # moodlog
//!
//! A Rust client for a mood-logging store backed by hosted Postgres exposed
//! through a Hasura-style GraphQL API. One entry is kept per team member
//! PIN per day; a second submission the same day overwrites the first.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe, injected configuration via [`StoreConfig`] and
//!   [`StoreConfigBuilder`] with validated newtypes for the endpoint and
//!   the admin credential
//! - A thin async GraphQL client ([`GraphqlClient`]) with a bounded
//!   timeout, no retries, and a clean transport/remote error split
//! - The [`MoodStore`] façade: upsert-one-entry-per-PIN-per-day and
//!   load-the-last-N-days, with all input validation done locally before
//!   any network call
//! - Pure display projections ([`timeline`], [`daily_average_trend`]) for
//!   the table and trend views
//!
//! ## Quick Start
//!
//! ```rust
//! use moodlog::{AdminSecret, EndpointUrl, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .endpoint(EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap())
//!     .admin_secret(AdminSecret::new("your-admin-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Logging and Loading Moods
//!
//! ```rust,ignore
//! use moodlog::{MoodStore, DEFAULT_WINDOW_DAYS};
//!
//! let store = MoodStore::new(&config);
//!
//! // One record per PIN per day; a second save the same day overwrites.
//! let saved = store.upsert("Rahim Uddin", "85", "😄 Great", "").await?;
//! println!("Saved entry {} for {}", saved.id.unwrap(), saved.date);
//!
//! // The timeline view reads the last 90 days, newest day first.
//! let recent = store.load_recent(DEFAULT_WINDOW_DAYS).await?;
//! ```
//!
//! ## Rendering Projections
//!
//! ```rust,ignore
//! use chrono::Local;
//! use moodlog::{daily_average_trend, timeline, TREND_WINDOW_DAYS};
//!
//! let rows = timeline(&recent);
//! let series = daily_average_trend(&recent, TREND_WINDOW_DAYS, Local::now().date_naive());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed
//!   explicitly, so tests can point the client at a fake endpoint
//! - **Fail-fast validation**: Newtypes validate on construction; form
//!   inputs are validated before any network call
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden recovery**: No retries, no caching; a failed call
//!   surfaces immediately and the user resubmits

pub mod clients;
pub mod config;
pub mod error;
pub mod report;
pub mod store;

// Re-export public types at crate root for convenience
pub use clients::{GraphqlClient, GraphqlError, RemoteError, ADMIN_SECRET_HEADER};
pub use config::{AdminSecret, EndpointUrl, StoreConfig, StoreConfigBuilder, DEFAULT_TIMEOUT};
pub use error::ConfigError;
pub use report::{daily_average_trend, timeline, TimelineRow, TrendPoint, TREND_WINDOW_DAYS};
pub use store::{
    cutoff_date, Mood, MoodLog, MoodStore, StoreError, ValidationError, DEFAULT_WINDOW_DAYS,
};
