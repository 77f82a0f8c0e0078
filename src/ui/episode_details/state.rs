use serde::Serialize;

use crate::domain::{Episode, EpisodeId, EpisodeWatchEntry, Season};
use crate::messages::UiMessage;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeDetailsViewState {
    pub episode_id: EpisodeId,
    pub episode: Option<Episode>,
    pub season: Option<Season>,
    pub watches: Vec<EpisodeWatchEntry>,
    /// Whether a new watch can be recorded: the episode has already aired.
    pub can_add_watch: bool,
    /// True while at least one operation is in flight.
    pub refreshing: bool,
    /// Message currently shown to the user.
    pub message: Option<UiMessage>,
}

impl UiState for EpisodeDetailsViewState {}

impl EpisodeDetailsViewState {
    pub fn new(episode_id: EpisodeId) -> Self {
        Self {
            episode_id,
            episode: None,
            season: None,
            watches: Vec::new(),
            can_add_watch: false,
            refreshing: false,
            message: None,
        }
    }
}
