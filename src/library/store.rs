use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::watch;

use crate::domain::{
    Episode, EpisodeDetails, EpisodeId, EpisodeWatchEntry, Season, SeasonId, WatchId,
};
use crate::error::OperationError;

/// Thread-safe episode storage with change notification.
///
/// Every mutation bumps a revision number; observers re-read on each bump.
#[derive(Clone)]
pub struct EpisodeLibrary {
    inner: Arc<RwLock<LibraryInner>>,
    revision: Arc<watch::Sender<u64>>,
}

#[derive(Default)]
struct LibraryInner {
    episodes: HashMap<EpisodeId, Episode>,
    seasons: HashMap<SeasonId, Season>,
    watches: BTreeMap<WatchId, EpisodeWatchEntry>,
    /// `None` once the id space is used up.
    next_watch_id: Option<i64>,
}

impl EpisodeLibrary {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(LibraryInner {
                next_watch_id: Some(1),
                ..LibraryInner::default()
            })),
            revision: Arc::new(revision),
        }
    }

    /// Receiver that changes after every mutation.
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn details(&self, episode_id: EpisodeId) -> EpisodeDetails {
        let inner = self.inner.read();
        let episode = inner.episodes.get(&episode_id).cloned();
        let season = episode
            .as_ref()
            .and_then(|episode| inner.seasons.get(&episode.season_id))
            .cloned();
        EpisodeDetails { episode, season }
    }

    /// Watches of `episode_id`, oldest first.
    pub fn watches_for(&self, episode_id: EpisodeId) -> Vec<EpisodeWatchEntry> {
        let inner = self.inner.read();
        let mut watches: Vec<_> = inner
            .watches
            .values()
            .filter(|entry| entry.episode_id == episode_id)
            .cloned()
            .collect();
        watches.sort_by_key(|entry| (entry.watched_at, entry.id));
        watches
    }

    pub fn upsert_season(&self, season: Season) {
        self.inner.write().seasons.insert(season.id, season);
        self.bump();
    }

    pub fn upsert_episode(&self, episode: Episode, season: Season) {
        {
            let mut inner = self.inner.write();
            inner.seasons.insert(season.id, season);
            inner.episodes.insert(episode.id, episode);
        }
        self.bump();
    }

    /// Record a watch of a known episode.
    pub fn add_watch(
        &self,
        episode_id: EpisodeId,
        watched_at: DateTime<Utc>,
    ) -> Result<WatchId, OperationError> {
        let id = {
            let mut inner = self.inner.write();
            if !inner.episodes.contains_key(&episode_id) {
                return Err(OperationError::EpisodeNotFound(episode_id));
            }
            let id = WatchId(inner.next_watch_id.ok_or(OperationError::WatchIdsExhausted)?);
            inner.next_watch_id = id.0.checked_add(1);
            inner.watches.insert(
                id,
                EpisodeWatchEntry {
                    id,
                    episode_id,
                    watched_at,
                },
            );
            id
        };
        self.bump();
        Ok(id)
    }

    /// Insert an existing entry, keeping its id.
    pub fn insert_watch(&self, entry: EpisodeWatchEntry) {
        {
            let mut inner = self.inner.write();
            inner.next_watch_id = match entry.id.0.checked_add(1) {
                Some(after) => inner.next_watch_id.map(|next| next.max(after)),
                None => None,
            };
            inner.watches.insert(entry.id, entry);
        }
        self.bump();
    }

    /// Remove every watch of `episode_id`, returning how many were removed.
    pub fn remove_watches(&self, episode_id: EpisodeId) -> usize {
        let removed = {
            let mut inner = self.inner.write();
            let before = inner.watches.len();
            inner.watches.retain(|_, entry| entry.episode_id != episode_id);
            before - inner.watches.len()
        };
        if removed > 0 {
            self.bump();
        }
        removed
    }

    pub fn remove_watch(&self, watch_id: WatchId) -> Result<(), OperationError> {
        if self.inner.write().watches.remove(&watch_id).is_none() {
            return Err(OperationError::WatchNotFound(watch_id));
        }
        self.bump();
        Ok(())
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}

impl Default for EpisodeLibrary {
    fn default() -> Self {
        Self::new()
    }
}
