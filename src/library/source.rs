use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Episode, EpisodeId, Season};
use crate::error::OperationError;

/// Where refreshed episode data comes from.
#[async_trait]
pub trait EpisodeSource: Send + Sync {
    async fn fetch_episode(&self, episode_id: EpisodeId) -> Result<(Episode, Season), OperationError>;
}

/// Source answering from a fixed catalogue, optionally after a delay.
#[derive(Debug, Clone, Default)]
pub struct StaticEpisodeSource {
    catalogue: HashMap<EpisodeId, (Episode, Season)>,
    latency: Duration,
}

impl StaticEpisodeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn insert(&mut self, episode: Episode, season: Season) {
        self.catalogue.insert(episode.id, (episode, season));
    }

    pub fn len(&self) -> usize {
        self.catalogue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogue.is_empty()
    }
}

#[async_trait]
impl EpisodeSource for StaticEpisodeSource {
    async fn fetch_episode(&self, episode_id: EpisodeId) -> Result<(Episode, Season), OperationError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.catalogue
            .get(&episode_id)
            .cloned()
            .ok_or(OperationError::EpisodeNotFound(episode_id))
    }
}
