//! Scripted collaborators for driving the episode details screen in tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::sync::{mpsc, watch, Semaphore};
use tokio_stream::wrappers::UnboundedReceiverStream;
use futures::StreamExt;

use showtrack::config::MessagesConfig;
use showtrack::domain::{Episode, EpisodeDetails, EpisodeId, EpisodeWatchEntry, Season, SeasonId, WatchId};
use showtrack::error::{OperationError, ScreenError};
use showtrack::interactor::{
    AddEpisodeWatchParams, FeedStream, Interactor, RemoveEpisodeWatchParams,
    RemoveEpisodeWatchesParams, SubjectObserver, UpdateEpisodeDetailsParams,
};
use showtrack::messages::UiMessageManager;
use showtrack::ui::episode_details::{
    EpisodeDetailsCollaborators, EpisodeDetailsScreen, EpisodeDetailsViewState, ScreenSettings,
};

pub const WAIT: Duration = Duration::from_secs(2);

/// Interactor that records its params and finishes when told to.
pub struct ScriptedInteractor<P> {
    name: &'static str,
    calls: Mutex<Vec<P>>,
    failures: Mutex<VecDeque<String>>,
    gate: Option<Semaphore>,
    completed: AtomicUsize,
}

impl<P: Clone + Send + 'static> ScriptedInteractor<P> {
    /// Completes immediately.
    pub fn instant(name: &'static str) -> Arc<Self> {
        Arc::new(Self::build(name, None))
    }

    /// Blocks each run until [`release`](Self::release) hands out a permit.
    pub fn gated(name: &'static str) -> Arc<Self> {
        Arc::new(Self::build(name, Some(Semaphore::new(0))))
    }

    fn build(name: &'static str, gate: Option<Semaphore>) -> Self {
        Self {
            name,
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
            gate,
            completed: AtomicUsize::new(0),
        }
    }

    /// Make the next run fail with `message`.
    pub fn fail_next(&self, message: &str) {
        self.failures.lock().push_back(message.to_string());
    }

    pub fn release(&self, runs: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(runs);
        }
    }

    pub fn calls(&self) -> Vec<P> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<P: Clone + Send + Sync + 'static> Interactor<P> for ScriptedInteractor<P> {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn execute(&self, params: P) -> Result<(), OperationError> {
        self.calls.lock().push(params);
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        let failure = self.failures.lock().pop_front();
        self.completed.fetch_add(1, Ordering::SeqCst);
        match failure {
            Some(message) => Err(OperationError::SourceUnavailable(message)),
            None => Ok(()),
        }
    }
}

/// Observer whose feeds are pushed by the test.
pub struct PushFeed<T> {
    subscriptions: Mutex<Vec<EpisodeId>>,
    senders: Mutex<Vec<mpsc::UnboundedSender<T>>>,
}

impl<T: Clone + Send + 'static> PushFeed<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            subscriptions: Mutex::new(Vec::new()),
            senders: Mutex::new(Vec::new()),
        })
    }

    pub fn subscriptions(&self) -> Vec<EpisodeId> {
        self.subscriptions.lock().clone()
    }

    pub fn emit(&self, value: T) {
        self.senders
            .lock()
            .retain(|sender| sender.send(value.clone()).is_ok());
    }

    /// True once every subscriber has dropped its stream.
    pub fn all_closed(&self) -> bool {
        self.senders.lock().iter().all(|sender| sender.is_closed())
    }
}

impl<T: Clone + Send + 'static> SubjectObserver<EpisodeId, T> for PushFeed<T> {
    fn observe(&self, episode_id: EpisodeId) -> FeedStream<T> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscriptions.lock().push(episode_id);
        self.senders.lock().push(sender);
        UnboundedReceiverStream::new(receiver).boxed()
    }
}

/// Every collaborator of one screen, individually scriptable.
pub struct Harness {
    pub update_details: Arc<ScriptedInteractor<UpdateEpisodeDetailsParams>>,
    pub add_watch: Arc<ScriptedInteractor<AddEpisodeWatchParams>>,
    pub remove_watches: Arc<ScriptedInteractor<RemoveEpisodeWatchesParams>>,
    pub remove_watch: Arc<ScriptedInteractor<RemoveEpisodeWatchParams>>,
    pub details: Arc<PushFeed<EpisodeDetails>>,
    pub watches: Arc<PushFeed<Vec<EpisodeWatchEntry>>>,
    pub messages: UiMessageManager,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_refresh(ScriptedInteractor::instant("update_episode_details"))
    }

    pub fn with_refresh(update_details: Arc<ScriptedInteractor<UpdateEpisodeDetailsParams>>) -> Self {
        Self {
            update_details,
            add_watch: ScriptedInteractor::instant("add_episode_watch"),
            remove_watches: ScriptedInteractor::instant("remove_episode_watches"),
            remove_watch: ScriptedInteractor::instant("remove_episode_watch"),
            details: PushFeed::new(),
            watches: PushFeed::new(),
            messages: UiMessageManager::spawn(&MessagesConfig::default()),
        }
    }

    pub fn collaborators(&self) -> EpisodeDetailsCollaborators {
        EpisodeDetailsCollaborators {
            update_details: self.update_details.clone(),
            add_watch: self.add_watch.clone(),
            remove_watches: self.remove_watches.clone(),
            remove_watch: self.remove_watch.clone(),
            observe_details: self.details.clone(),
            observe_watches: self.watches.clone(),
        }
    }

    pub fn open(&self, raw_episode_id: &str) -> Result<EpisodeDetailsScreen, ScreenError> {
        EpisodeDetailsScreen::open(
            Some(raw_episode_id),
            self.collaborators(),
            &self.messages,
            ScreenSettings::default(),
        )
    }
}

/// Wait until the screen state satisfies `predicate`.
pub async fn wait_for_state<F>(
    updates: &mut watch::Receiver<EpisodeDetailsViewState>,
    predicate: F,
) -> EpisodeDetailsViewState
where
    F: FnMut(&EpisodeDetailsViewState) -> bool,
{
    tokio::time::timeout(WAIT, updates.wait_for(predicate))
        .await
        .expect("timed out waiting for state")
        .expect("screen state dropped")
        .clone()
}

/// Poll `condition` until it holds.
pub async fn eventually<F>(mut condition: F)
where
    F: FnMut() -> bool,
{
    let poll = async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    };
    tokio::time::timeout(WAIT, poll)
        .await
        .expect("condition never held");
}

/// Let spawned tasks run for a moment.
pub fn settle() -> impl Future<Output = ()> {
    tokio::time::sleep(Duration::from_millis(50))
}

pub fn season() -> Season {
    Season {
        id: SeasonId(10),
        show_title: "The Expanse".to_string(),
        number: 1,
        title: Some("Season 1".to_string()),
    }
}

pub fn episode(id: i64, first_aired: Option<DateTime<Utc>>) -> Episode {
    Episode {
        id: EpisodeId(id),
        season_id: SeasonId(10),
        number: 1,
        title: "Dulcinea".to_string(),
        summary: None,
        first_aired,
    }
}

pub fn details(first_aired: Option<DateTime<Utc>>) -> EpisodeDetails {
    EpisodeDetails {
        episode: Some(episode(42, first_aired)),
        season: Some(season()),
    }
}

pub fn watch_entry(id: i64, watched_at: DateTime<Utc>) -> EpisodeWatchEntry {
    EpisodeWatchEntry {
        id: WatchId(id),
        episode_id: EpisodeId(42),
        watched_at,
    }
}
