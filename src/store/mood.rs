//! The fixed mood taxonomy.

use std::fmt;
use std::str::FromStr;

use crate::store::errors::ValidationError;

/// One of the five fixed moods a team member can log.
///
/// Each mood maps to a fixed integer severity score from 5 (best) down
/// to 1 (worst). The label strings are stored alongside the score in the
/// backing store, so the mapping here must stay stable.
///
/// # Example
///
/// ```rust
/// use moodlog::Mood;
///
/// let mood: Mood = "😄 Great".parse().unwrap();
/// assert_eq!(mood, Mood::Great);
/// assert_eq!(mood.score(), 5);
///
/// // Unknown labels are rejected before any network call
/// assert!("ecstatic".parse::<Mood>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    /// "😄 Great", score 5.
    Great,
    /// "🙂 Good", score 4.
    Good,
    /// "😐 Okay", score 3.
    Okay,
    /// "🙁 Low", score 2.
    Low,
    /// "😢 Bad", score 1.
    Bad,
}

impl Mood {
    /// All moods, best first, in the order they are presented to users.
    pub const ALL: [Self; 5] = [Self::Great, Self::Good, Self::Okay, Self::Low, Self::Bad];

    /// Returns the display label stored in the backing store.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Great => "😄 Great",
            Self::Good => "🙂 Good",
            Self::Okay => "😐 Okay",
            Self::Low => "🙁 Low",
            Self::Bad => "😢 Bad",
        }
    }

    /// Returns the integer severity score for this mood.
    ///
    /// Scores are in `[1, 5]`, stored as a smallint for aggregation.
    #[must_use]
    pub const fn score(self) -> i16 {
        match self {
            Self::Great => 5,
            Self::Good => 4,
            Self::Okay => 3,
            Self::Low => 2,
            Self::Bad => 1,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.label() == s)
            .ok_or_else(|| ValidationError::UnknownMood {
                label: s.to_string(),
            })
    }
}
