//! Error types for the mood store façade.
//!
//! Failures split into two families, and the split matters for how they are
//! presented: [`ValidationError`]s are local, user-correctable problems
//! rejected before any network call, while the remaining [`StoreError`]
//! variants are remote failures the user can only resubmit after.

use thiserror::Error;

use crate::clients::graphql::GraphqlError;

/// A locally-detected input problem.
///
/// Validation runs before any network call; a rejected input never reaches
/// the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The team member name is empty after trimming.
    #[error("Team Member required.")]
    EmptyTeamMember,

    /// The PIN is empty after trimming or contains characters outside
    /// digits, letters, and dashes.
    #[error("Valid PIN required (digits/letters/-), got '{pin}'.")]
    InvalidPin {
        /// The rejected PIN, after trimming.
        pin: String,
    },

    /// The mood label is not a member of the fixed mood set.
    #[error("Unknown mood label '{label}'.")]
    UnknownMood {
        /// The rejected label.
        label: String,
    },

    /// The requested window is unusable: zero days, or so wide that its
    /// start falls outside the representable date range.
    #[error("Invalid window of {days} days.")]
    InvalidWindow {
        /// The rejected window size.
        days: u32,
    },
}

/// Error type for mood store operations.
///
/// Client errors are propagated unchanged rather than translated; the
/// caller is expected to present them to the end user as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input validation failed before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The GraphQL call failed, either in transport or server-side.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The endpoint answered successfully but the payload did not match
    /// the expected row shape.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
