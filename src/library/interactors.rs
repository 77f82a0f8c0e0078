use std::sync::Arc;

use async_trait::async_trait;

use super::source::EpisodeSource;
use super::store::EpisodeLibrary;
use crate::error::OperationError;
use crate::interactor::{
    AddEpisodeWatchParams, Interactor, RemoveEpisodeWatchParams, RemoveEpisodeWatchesParams,
    UpdateEpisodeDetailsParams,
};

/// Fetch an episode from the source and store it in the library.
pub struct UpdateEpisodeDetails {
    library: EpisodeLibrary,
    source: Arc<dyn EpisodeSource>,
}

impl UpdateEpisodeDetails {
    pub fn new(library: EpisodeLibrary, source: Arc<dyn EpisodeSource>) -> Self {
        Self { library, source }
    }
}

#[async_trait]
impl Interactor<UpdateEpisodeDetailsParams> for UpdateEpisodeDetails {
    fn name(&self) -> &'static str {
        "update_episode_details"
    }

    async fn execute(&self, params: UpdateEpisodeDetailsParams) -> Result<(), OperationError> {
        tracing::debug!(
            episode_id = %params.episode_id,
            from_user_interaction = params.from_user_interaction,
            "Fetching episode"
        );
        let (episode, season) = self.source.fetch_episode(params.episode_id).await?;
        self.library.upsert_episode(episode, season);
        Ok(())
    }
}

pub struct AddEpisodeWatch {
    library: EpisodeLibrary,
}

impl AddEpisodeWatch {
    pub fn new(library: EpisodeLibrary) -> Self {
        Self { library }
    }
}

#[async_trait]
impl Interactor<AddEpisodeWatchParams> for AddEpisodeWatch {
    fn name(&self) -> &'static str {
        "add_episode_watch"
    }

    async fn execute(&self, params: AddEpisodeWatchParams) -> Result<(), OperationError> {
        let watch_id = self.library.add_watch(params.episode_id, params.watched_at)?;
        tracing::debug!(episode_id = %params.episode_id, %watch_id, "Watch recorded");
        Ok(())
    }
}

pub struct RemoveEpisodeWatches {
    library: EpisodeLibrary,
}

impl RemoveEpisodeWatches {
    pub fn new(library: EpisodeLibrary) -> Self {
        Self { library }
    }
}

#[async_trait]
impl Interactor<RemoveEpisodeWatchesParams> for RemoveEpisodeWatches {
    fn name(&self) -> &'static str {
        "remove_episode_watches"
    }

    async fn execute(&self, params: RemoveEpisodeWatchesParams) -> Result<(), OperationError> {
        let removed = self.library.remove_watches(params.episode_id);
        tracing::debug!(episode_id = %params.episode_id, removed, "Watches removed");
        Ok(())
    }
}

pub struct RemoveEpisodeWatch {
    library: EpisodeLibrary,
}

impl RemoveEpisodeWatch {
    pub fn new(library: EpisodeLibrary) -> Self {
        Self { library }
    }
}

#[async_trait]
impl Interactor<RemoveEpisodeWatchParams> for RemoveEpisodeWatch {
    fn name(&self) -> &'static str {
        "remove_episode_watch"
    }

    async fn execute(&self, params: RemoveEpisodeWatchParams) -> Result<(), OperationError> {
        self.library.remove_watch(params.watch_id)
    }
}
