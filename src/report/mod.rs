//! Display projections over loaded mood logs.
//!
//! The render path is two independent, pure projections over the rows
//! returned by [`MoodStore::load_recent`](crate::store::MoodStore::load_recent):
//!
//! - [`timeline`]: the table of recent entries, newest day first
//! - [`daily_average_trend`]: the daily-average line series over the
//!   trailing 30-day window, linearly interpolated across missing days
//!
//! Actual rendering (widgets, charts) is left to the embedding
//! application; these projections produce the data those renderers consume.

mod trend;

pub use trend::{daily_average_trend, TrendPoint, TREND_WINDOW_DAYS};

use chrono::NaiveDate;

use crate::store::MoodLog;

/// One row of the timeline table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineRow {
    /// The calendar day of the entry.
    pub date: NaiveDate,
    /// The team member's name.
    pub team_member: String,
    /// The team member's PIN.
    pub pin: String,
    /// The mood label as stored.
    pub mood: String,
    /// The optional comment.
    pub comments: Option<String>,
}

/// Projects loaded rows into timeline table rows.
///
/// Row order is preserved; [`MoodStore::load_recent`](crate::store::MoodStore::load_recent)
/// already returns rows newest day first.
#[must_use]
pub fn timeline(logs: &[MoodLog]) -> Vec<TimelineRow> {
    logs.iter()
        .map(|log| TimelineRow {
            date: log.date,
            team_member: log.team_member.clone(),
            pin: log.pin.clone(),
            mood: log.mood_label.clone(),
            comments: log.comments.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(d: u32, pin: &str) -> MoodLog {
        MoodLog {
            id: None,
            date: NaiveDate::from_ymd_opt(2026, 8, d).unwrap(),
            team_member: "Rahim Uddin".to_string(),
            pin: pin.to_string(),
            mood_label: "🙂 Good".to_string(),
            score: 4,
            comments: Some("steady".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_timeline_preserves_order_and_fields() {
        let logs = vec![entry(28, "85"), entry(27, "86")];
        let rows = timeline(&logs);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pin, "85");
        assert_eq!(rows[1].pin, "86");
        assert_eq!(rows[0].mood, "🙂 Good");
        assert_eq!(rows[0].comments.as_deref(), Some("steady"));
    }

    #[test]
    fn test_timeline_of_empty_input_is_empty() {
        assert!(timeline(&[]).is_empty());
    }
}
