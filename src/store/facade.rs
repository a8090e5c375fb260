//! The mood store façade.
//!
//! This module provides [`MoodStore`], the two-operation data-access layer
//! built on top of the [`GraphqlClient`]: an upsert keyed on `(pin, date)`
//! and a windowed load of recent entries.

use chrono::{Days, Local, NaiveDate};

use crate::clients::graphql::GraphqlClient;
use crate::config::StoreConfig;
use crate::store::errors::{StoreError, ValidationError};
use crate::store::{Mood, MoodLog};

/// Default window size for [`MoodStore::load_recent`], in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 90;

/// Upsert mutation, keyed on the store's `(pin, date)` uniqueness
/// constraint. On conflict the mutable columns are overwritten in place;
/// `pin` and `date` are the conflict key and never change. The store
/// assigns `date` ("today") and `created_at` itself.
const UPSERT_MOOD_LOG: &str = "\
mutation UpsertMoodLog($team_member: String!, $pin: String!, $mood_label: String!, $score: smallint!, $comments: String) {
  insert_mood_logs_one(
    object: {team_member: $team_member, pin: $pin, mood_label: $mood_label, score: $score, comments: $comments},
    on_conflict: {constraint: mood_logs_pin_date_unique, update_columns: [team_member, mood_label, score, comments]}
  ) { id date team_member pin mood_label score comments created_at }
}";

/// Windowed list query: every row with `date >= $from`, newest day first.
const LIST_MOOD_LOGS: &str = "\
query ListMoodLogs($from: date!) {
  mood_logs(where: {date: {_gte: $from}}, order_by: {date: desc}) {
    date
    team_member
    pin
    mood_label
    score
    comments
  }
}";

/// The mood store façade.
///
/// Two operations, both single-shot request/response calls against the
/// backing store: [`upsert`](Self::upsert) and
/// [`load_recent`](Self::load_recent). There is no in-process caching;
/// every read re-queries the store. Consistency of the one-row-per-pin-per-
/// day invariant is delegated entirely to the store's conflict resolution.
///
/// # Example
///
/// ```rust,ignore
/// use moodlog::{AdminSecret, EndpointUrl, MoodStore, StoreConfig};
///
/// let config = StoreConfig::builder()
///     .endpoint(EndpointUrl::new("https://example.nhost.run/v1/graphql").unwrap())
///     .admin_secret(AdminSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let store = MoodStore::new(&config);
///
/// let saved = store.upsert("Rahim Uddin", "85", "😄 Great", "").await?;
/// let recent = store.load_recent(90).await?;
/// ```
#[derive(Debug)]
pub struct MoodStore {
    client: GraphqlClient,
}

// Verify MoodStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoodStore>();
};

impl MoodStore {
    /// Creates a new store façade from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created; see
    /// [`GraphqlClient::new`].
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self::from_client(GraphqlClient::new(config))
    }

    /// Creates a store façade from an existing client.
    #[must_use]
    pub const fn from_client(client: GraphqlClient) -> Self {
        Self { client }
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn client(&self) -> &GraphqlClient {
        &self.client
    }

    /// Inserts or updates today's entry for the given PIN.
    ///
    /// The name and PIN are trimmed, the mood label is mapped to its fixed
    /// score, and blank comments are normalized to absent. The store keys
    /// the upsert on `(pin, date)` where `date` is "today" at the store; a
    /// second submission for the same PIN and day overwrites the previous
    /// entry's mutable fields rather than creating a new row.
    ///
    /// Returns the full stored row, including the store-assigned `id` and
    /// `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] without any network call if the
    /// name is empty, the PIN is empty or contains characters outside
    /// `[0-9A-Za-z-]`, or the mood label is not in the fixed set. Client
    /// errors ([`StoreError::Graphql`]) are propagated unchanged.
    pub async fn upsert(
        &self,
        team_member: &str,
        pin: &str,
        mood_label: &str,
        comments: &str,
    ) -> Result<MoodLog, StoreError> {
        let team_member = team_member.trim();
        if team_member.is_empty() {
            return Err(ValidationError::EmptyTeamMember.into());
        }

        let pin = pin.trim();
        if !is_valid_pin(pin) {
            return Err(ValidationError::InvalidPin {
                pin: pin.to_string(),
            }
            .into());
        }

        let mood: Mood = mood_label.parse::<Mood>()?;

        let comments = comments.trim();
        let comments = if comments.is_empty() {
            None
        } else {
            Some(comments)
        };

        let variables = serde_json::json!({
            "team_member": team_member,
            "pin": pin,
            "mood_label": mood.label(),
            "score": mood.score(),
            "comments": comments,
        });

        tracing::debug!(pin, "upserting mood log");

        let data = self.client.execute(UPSERT_MOOD_LOG, variables).await?;
        let row = data
            .get("insert_mood_logs_one")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        let log: MoodLog = serde_json::from_value(row)?;
        Ok(log)
    }

    /// Loads every entry from the last `days` days, newest day first.
    ///
    /// The window is inclusive: with `days = 90`, rows from
    /// `today - 89 days` through today are returned. An empty result is a
    /// normal outcome, not an error. Ordering among same-day rows is
    /// whatever the store returns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] without any network call if
    /// `days` is zero or too large for a representable window start.
    /// Client errors are propagated unchanged.
    pub async fn load_recent(&self, days: u32) -> Result<Vec<MoodLog>, StoreError> {
        let from = cutoff_date(Local::now().date_naive(), days)?;

        tracing::debug!(%from, days, "loading recent mood logs");

        let data = self
            .client
            .execute(LIST_MOOD_LOGS, serde_json::json!({ "from": from }))
            .await?;
        let rows = data
            .get("mood_logs")
            .cloned()
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
        let logs: Vec<MoodLog> = serde_json::from_value(rows)?;
        Ok(logs)
    }
}

/// Returns whether a trimmed PIN is acceptable: non-empty and made of
/// digits, ASCII letters, and dashes only.
fn is_valid_pin(pin: &str) -> bool {
    !pin.is_empty() && pin.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Computes the inclusive lower bound of a `days`-wide window ending today.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidWindow`] if `days` is zero, or so
/// large that the window start falls outside the representable date range.
pub fn cutoff_date(today: NaiveDate, days: u32) -> Result<NaiveDate, ValidationError> {
    if days == 0 {
        return Err(ValidationError::InvalidWindow { days });
    }
    today
        .checked_sub_days(Days::new(u64::from(days) - 1))
        .ok_or(ValidationError::InvalidWindow { days })
}
