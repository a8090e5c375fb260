//! The stored mood log record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Mood;

/// One mood entry for one person on one day.
///
/// At most one record exists per `(pin, date)` pair; the backing store
/// enforces this with a uniqueness constraint, and a second submission for
/// the same pin and day overwrites the mutable fields in place.
///
/// The windowed list query returns only the data columns, so `id` and
/// `created_at` are optional: they are present on rows returned by the
/// upsert mutation and absent on list reads.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MoodLog {
    /// Store-assigned surrogate key. Present on upsert results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The calendar day this entry is for. Assigned by the store ("today").
    pub date: NaiveDate,
    /// Free-text name of the team member, trimmed.
    pub team_member: String,
    /// Short alphanumeric/dash identifier, trimmed.
    pub pin: String,
    /// The mood label, one of the fixed set.
    pub mood_label: String,
    /// Integer severity score in `[1, 5]`, derived from the label.
    pub score: i16,
    /// Optional free-text comment. Blank comments are normalized to absent.
    #[serde(default)]
    pub comments: Option<String>,
    /// Set by the store on first insert. Present on upsert results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl MoodLog {
    /// Returns the parsed mood, or `None` if the stored label is not part
    /// of the current taxonomy.
    #[must_use]
    pub fn mood(&self) -> Option<Mood> {
        self.mood_label.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_list_row_without_id_or_created_at() {
        let json = r#"{
            "date": "2026-08-28",
            "team_member": "Rahim Uddin",
            "pin": "85",
            "mood_label": "😄 Great",
            "score": 5,
            "comments": null
        }"#;

        let log: MoodLog = serde_json::from_str(json).unwrap();
        assert!(log.id.is_none());
        assert!(log.created_at.is_none());
        assert_eq!(log.team_member, "Rahim Uddin");
        assert_eq!(log.pin, "85");
        assert_eq!(log.score, 5);
        assert!(log.comments.is_none());
    }

    #[test]
    fn test_deserializes_upsert_row_with_id_and_created_at() {
        let json = r#"{
            "id": "0b9f3f6e-1d1e-4c44-9edb-0a6a2f3f9f10",
            "date": "2026-08-28",
            "team_member": "Rahim Uddin",
            "pin": "85",
            "mood_label": "🙂 Good",
            "score": 4,
            "comments": "shipped the release",
            "created_at": "2026-08-28T09:30:00Z"
        }"#;

        let log: MoodLog = serde_json::from_str(json).unwrap();
        assert!(log.id.is_some());
        assert!(log.created_at.is_some());
        assert_eq!(log.comments.as_deref(), Some("shipped the release"));
    }

    #[test]
    fn test_mood_parses_known_label() {
        let log = MoodLog {
            id: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            team_member: "Rahim Uddin".to_string(),
            pin: "85".to_string(),
            mood_label: "😢 Bad".to_string(),
            score: 1,
            comments: None,
            created_at: None,
        };
        assert_eq!(log.mood(), Some(Mood::Bad));
    }

    #[test]
    fn test_mood_is_none_for_retired_label() {
        let log = MoodLog {
            id: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            team_member: "Rahim Uddin".to_string(),
            pin: "85".to_string(),
            mood_label: "meh".to_string(),
            score: 3,
            comments: None,
            created_at: None,
        };
        assert_eq!(log.mood(), None);
    }
}
