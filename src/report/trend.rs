//! Daily-average trend series.

use std::collections::BTreeMap;

use chrono::{Days, Duration, NaiveDate};

use crate::store::MoodLog;

/// Window size for the trend series, in days.
pub const TREND_WINDOW_DAYS: u32 = 30;

/// One point of the daily-average trend series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendPoint {
    /// The calendar day.
    pub date: NaiveDate,
    /// Mean score for that day, or a linearly interpolated value for days
    /// with no entries.
    pub score: f64,
}

/// Computes the daily-average trend over the trailing window ending `today`.
///
/// Entries older than `today - (window_days - 1)` are ignored. Scores are
/// averaged per calendar day, and the series spans from the earliest to the
/// latest observed day within the window with one point per day; days with
/// no entries get a linearly interpolated score between their nearest
/// observed neighbors. A zero-day window or a window with no entries yields
/// an empty series.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use moodlog::{daily_average_trend, MoodLog};
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 8, d).unwrap();
/// let entry = |date, score| MoodLog {
///     id: None,
///     date,
///     team_member: "Rahim Uddin".to_string(),
///     pin: "85".to_string(),
///     mood_label: "😐 Okay".to_string(),
///     score,
///     comments: None,
///     created_at: None,
/// };
///
/// let logs = vec![entry(day(25), 5), entry(day(27), 1)];
/// let series = daily_average_trend(&logs, 30, day(28));
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series[1].date, day(26));
/// assert!((series[1].score - 3.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn daily_average_trend(logs: &[MoodLog], window_days: u32, today: NaiveDate) -> Vec<TrendPoint> {
    if window_days == 0 {
        return Vec::new();
    }
    // A window reaching past the representable date range covers everything.
    let cutoff = today
        .checked_sub_days(Days::new(u64::from(window_days) - 1))
        .unwrap_or(NaiveDate::MIN);

    // Sum and count per observed day, ordered by date.
    let mut by_day: BTreeMap<NaiveDate, (i64, u32)> = BTreeMap::new();
    for log in logs {
        if log.date >= cutoff {
            let entry = by_day.entry(log.date).or_insert((0, 0));
            entry.0 += i64::from(log.score);
            entry.1 += 1;
        }
    }

    let observed: Vec<(NaiveDate, f64)> = by_day
        .into_iter()
        .map(|(date, (sum, count))| (date, sum as f64 / f64::from(count)))
        .collect();

    let Some((&first, rest)) = observed.split_first() else {
        return Vec::new();
    };

    let mut series = vec![TrendPoint {
        date: first.0,
        score: first.1,
    }];
    let mut prev = first;
    for &next in rest {
        let span = (next.0 - prev.0).num_days();
        for offset in 1..span {
            let fraction = offset as f64 / span as f64;
            series.push(TrendPoint {
                date: prev.0 + Duration::days(offset),
                score: prev.1 + (next.1 - prev.1) * fraction,
            });
        }
        series.push(TrendPoint {
            date: next.0,
            score: next.1,
        });
        prev = next;
    }
    series
}
