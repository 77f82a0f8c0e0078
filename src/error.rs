//! Error types for screen construction and collaborator operations.

use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

use crate::domain::{EpisodeId, WatchId};

/// Errors raised by the screen itself.
///
/// The identifier variants are fatal: the screen is never constructed.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Episode id is required to open the episode details screen")]
    MissingEpisodeId,

    #[error("Episode id '{raw}' is not a valid id: {source}")]
    MalformedEpisodeId {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// The screen's owner task has ended and no longer accepts actions.
    #[error("Episode details screen is closed")]
    Closed,
}

/// Failure of a single interactor run.
///
/// The screen never inspects the variant; it logs the error and shows its
/// message to the user.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{operation} timed out after {}s", after.as_secs())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("Episode {0} not found")]
    EpisodeNotFound(EpisodeId),

    #[error("Watch entry {0} not found")]
    WatchNotFound(WatchId),

    #[error("No watch ids left to assign")]
    WatchIdsExhausted,

    #[error("Episode source unavailable: {0}")]
    SourceUnavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
