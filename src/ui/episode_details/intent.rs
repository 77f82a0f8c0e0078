use chrono::{DateTime, Utc};

use crate::domain::{EpisodeDetails, EpisodeWatchEntry};
use crate::messages::UiMessage;
use crate::ui::mvi::Intent;

/// State changes the episode details reducer understands.
#[derive(Debug, Clone)]
pub enum EpisodeDetailsIntent {
    /// The details feed emitted. `now` is the time of the emission.
    DetailsLoaded {
        details: EpisodeDetails,
        now: DateTime<Utc>,
    },

    /// The watches feed emitted.
    WatchesLoaded { watches: Vec<EpisodeWatchEntry> },

    /// The pending-operation counter crossed zero.
    LoadingChanged { refreshing: bool },

    /// The message manager changed the visible message.
    MessageChanged { message: Option<UiMessage> },
}

impl Intent for EpisodeDetailsIntent {}
