use crate::domain::WatchId;

/// Everything the user can ask the episode details screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeDetailsAction {
    /// Reload the episode from its source.
    Refresh,
    /// Record a watch of the episode at the current time.
    AddWatch,
    /// Forget every recorded watch of the episode.
    RemoveAllWatches,
    RemoveWatch { watch_id: WatchId },
    /// Dismiss the visible message.
    ClearError,
}
