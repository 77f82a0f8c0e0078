use chrono::{DateTime, Utc};

use crate::domain::{EpisodeId, WatchId};

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEpisodeDetailsParams {
    pub episode_id: EpisodeId,
    /// True for a user-triggered refresh, false for the initial load. Telemetry only.
    pub from_user_interaction: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddEpisodeWatchParams {
    pub episode_id: EpisodeId,
    pub watched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveEpisodeWatchesParams {
    pub episode_id: EpisodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveEpisodeWatchParams {
    pub watch_id: WatchId,
}
