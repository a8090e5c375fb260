//! The mood store: data model and two-operation façade.
//!
//! This module is the data-access core of the crate. It holds:
//!
//! - [`Mood`]: the fixed five-mood taxonomy with its score mapping
//! - [`MoodLog`]: one stored entry for one person on one day
//! - [`MoodStore`]: the façade with [`upsert`](MoodStore::upsert) and
//!   [`load_recent`](MoodStore::load_recent)
//! - [`ValidationError`] / [`StoreError`]: local vs. remote failures
//!
//! # Invariant
//!
//! At most one [`MoodLog`] exists per `(pin, date)` pair. The backing
//! store enforces this with a uniqueness constraint; the upsert's conflict
//! clause overwrites the mutable fields in place on a second submission for
//! the same PIN and day.
//!
//! # Example
//!
//! ```rust,ignore
//! use moodlog::{AdminSecret, EndpointUrl, MoodStore, StoreConfig, DEFAULT_WINDOW_DAYS};
//!
//! let config = StoreConfig::builder()
//!     .endpoint(EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap())
//!     .admin_secret(AdminSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let store = MoodStore::new(&config);
//! store.upsert("Rahim Uddin", "85", "🙂 Good", "steady day").await?;
//! let recent = store.load_recent(DEFAULT_WINDOW_DAYS).await?;
//! ```

mod errors;
mod facade;
mod log;
mod mood;

pub use errors::{StoreError, ValidationError};
pub use facade::{cutoff_date, MoodStore, DEFAULT_WINDOW_DAYS};
pub use log::MoodLog;
pub use mood::Mood;
