use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::stream::{self, Stream, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::config::ScreenConfig;
use crate::domain::{EpisodeDetails, EpisodeId, EpisodeWatchEntry};
use crate::error::ScreenError;
use crate::interactor::{
    invoke, AddEpisodeWatchParams, Interactor, InvokeStatus, RemoveEpisodeWatchParams,
    RemoveEpisodeWatchesParams, StatusStream, SubjectObserver, UpdateEpisodeDetailsParams,
};
use crate::lifetime::{LifetimeHandle, ScreenLifetime};
use crate::messages::{UiMessage, UiMessageManager};
use crate::ui::mvi::Reducer;

use super::action::EpisodeDetailsAction;
use super::intent::EpisodeDetailsIntent;
use super::loading::LoadingCounter;
use super::reducer::EpisodeDetailsReducer;
use super::state::EpisodeDetailsViewState;

/// External collaborators the screen drives.
#[derive(Clone)]
pub struct EpisodeDetailsCollaborators {
    pub update_details: Arc<dyn Interactor<UpdateEpisodeDetailsParams>>,
    pub add_watch: Arc<dyn Interactor<AddEpisodeWatchParams>>,
    pub remove_watches: Arc<dyn Interactor<RemoveEpisodeWatchesParams>>,
    pub remove_watch: Arc<dyn Interactor<RemoveEpisodeWatchParams>>,
    pub observe_details: Arc<dyn SubjectObserver<EpisodeId, EpisodeDetails>>,
    pub observe_watches: Arc<dyn SubjectObserver<EpisodeId, Vec<EpisodeWatchEntry>>>,
}

#[derive(Debug, Clone)]
pub struct ScreenSettings {
    pub interactor_timeout: Duration,
}

impl From<&ScreenConfig> for ScreenSettings {
    fn from(config: &ScreenConfig) -> Self {
        Self {
            interactor_timeout: config.interactor_timeout(),
        }
    }
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self::from(&ScreenConfig::default())
    }
}

/// Operations the screen can start, one per action that needs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    AddWatch,
    RemoveAllWatches,
    RemoveWatch,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Refresh => "refresh",
            Operation::AddWatch => "add_watch",
            Operation::RemoveAllWatches => "remove_all_watches",
            Operation::RemoveWatch => "remove_watch",
        }
    }
}

/// Everything the owner task consumes, in arrival order.
enum ScreenEvent {
    Details(EpisodeDetails),
    Watches(Vec<EpisodeWatchEntry>),
    Action(EpisodeDetailsAction),
    Status {
        operation: Operation,
        status: InvokeStatus,
    },
    Message(Option<UiMessage>),
}

/// Presentation-side handle to one open episode details screen.
///
/// Dropping the handle ends the screen: feeds are unsubscribed and in-flight
/// operations are abandoned.
pub struct EpisodeDetailsScreen {
    events: mpsc::UnboundedSender<ScreenEvent>,
    state: watch::Receiver<EpisodeDetailsViewState>,
    lifetime: ScreenLifetime,
}

impl EpisodeDetailsScreen {
    /// Open the screen for `raw_episode_id` and start its owner task.
    ///
    /// Must be called within a tokio runtime.
    ///
    /// # Errors
    /// Returns [`ScreenError::MissingEpisodeId`] or
    /// [`ScreenError::MalformedEpisodeId`] when the id is absent or not a number.
    pub fn open(
        raw_episode_id: Option<&str>,
        collaborators: EpisodeDetailsCollaborators,
        messages: &UiMessageManager,
        settings: ScreenSettings,
    ) -> Result<Self, ScreenError> {
        let episode_id = parse_episode_id(raw_episode_id)?;
        let lifetime = ScreenLifetime::new();
        let (events, receiver) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(EpisodeDetailsViewState::new(episode_id));

        let owner = ScreenOwner {
            state: state_tx,
            loading: LoadingCounter::new(),
            bound: None,
            collaborators,
            messages: messages.clone(),
            settings,
            events: events.clone(),
            lifetime: lifetime.handle(),
        };
        lifetime.handle().spawn(owner.run(receiver));
        tracing::info!(%episode_id, "Episode details screen opened");

        Ok(Self {
            events,
            state,
            lifetime,
        })
    }

    pub fn episode_id(&self) -> EpisodeId {
        self.state.borrow().episode_id
    }

    /// Latest state snapshot.
    pub fn state(&self) -> EpisodeDetailsViewState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every new snapshot.
    pub fn subscribe(&self) -> watch::Receiver<EpisodeDetailsViewState> {
        self.state.clone()
    }

    /// Queue `action` for the owner task. Never blocks.
    pub fn submit(&self, action: EpisodeDetailsAction) -> Result<(), ScreenError> {
        if self.lifetime.is_ended() {
            return Err(ScreenError::Closed);
        }
        self.events
            .send(ScreenEvent::Action(action))
            .map_err(|_| ScreenError::Closed)
    }

    pub fn close(self) {
        tracing::info!(episode_id = %self.episode_id(), "Episode details screen closed");
        self.lifetime.end();
    }
}

/// Parse the identifier handed over by the navigation layer.
pub(crate) fn parse_episode_id(raw: Option<&str>) -> Result<EpisodeId, ScreenError> {
    let raw = raw
        .filter(|raw| !raw.trim().is_empty())
        .ok_or(ScreenError::MissingEpisodeId)?;
    raw.parse::<EpisodeId>()
        .map_err(|source| ScreenError::MalformedEpisodeId {
            raw: raw.to_string(),
            source,
        })
}

/// The single task that owns the screen state.
struct ScreenOwner {
    state: watch::Sender<EpisodeDetailsViewState>,
    loading: LoadingCounter,
    bound: Option<EpisodeId>,
    collaborators: EpisodeDetailsCollaborators,
    messages: UiMessageManager,
    settings: ScreenSettings,
    events: mpsc::UnboundedSender<ScreenEvent>,
    lifetime: LifetimeHandle,
}

impl ScreenOwner {
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<ScreenEvent>) {
        self.forward(UnboundedReceiverStream::new(self.messages.subscribe()).map(ScreenEvent::Message));

        let episode_id = self.state.borrow().episode_id;
        self.bind(episode_id);

        while let Some(event) = events.recv().await {
            self.handle(event);
        }
    }

    /// Subscribe both feeds for `episode_id` and run the initial refresh.
    fn bind(&mut self, episode_id: EpisodeId) {
        if self.bound == Some(episode_id) {
            return;
        }
        self.bound = Some(episode_id);
        tracing::debug!(%episode_id, "Subscribing episode feeds");

        let details = self.collaborators.observe_details.observe(episode_id);
        self.forward(details.map(ScreenEvent::Details));

        // Start from an empty history so the list renders before the first emission.
        let watches = stream::once(async { Vec::<EpisodeWatchEntry>::new() })
            .chain(self.collaborators.observe_watches.observe(episode_id));
        self.forward(watches.map(ScreenEvent::Watches));

        self.refresh(false);
    }

    fn handle(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::Details(details) => self.dispatch(EpisodeDetailsIntent::DetailsLoaded {
                details,
                now: Utc::now(),
            }),
            ScreenEvent::Watches(watches) => {
                self.dispatch(EpisodeDetailsIntent::WatchesLoaded { watches })
            }
            ScreenEvent::Action(action) => self.on_action(action),
            ScreenEvent::Status { operation, status } => self.on_status(operation, status),
            ScreenEvent::Message(message) => {
                self.dispatch(EpisodeDetailsIntent::MessageChanged { message })
            }
        }
    }

    fn on_action(&mut self, action: EpisodeDetailsAction) {
        tracing::debug!(?action, "Action received");
        let episode_id = self.state.borrow().episode_id;
        let timeout = self.settings.interactor_timeout;

        match action {
            EpisodeDetailsAction::Refresh => self.refresh(true),
            EpisodeDetailsAction::AddWatch => {
                let params = AddEpisodeWatchParams {
                    episode_id,
                    watched_at: Utc::now(),
                };
                let statuses = invoke(self.collaborators.add_watch.clone(), params, timeout);
                self.launch(Operation::AddWatch, statuses);
            }
            EpisodeDetailsAction::RemoveAllWatches => {
                let params = RemoveEpisodeWatchesParams { episode_id };
                let statuses = invoke(self.collaborators.remove_watches.clone(), params, timeout);
                self.launch(Operation::RemoveAllWatches, statuses);
            }
            EpisodeDetailsAction::RemoveWatch { watch_id } => {
                let params = RemoveEpisodeWatchParams { watch_id };
                let statuses = invoke(self.collaborators.remove_watch.clone(), params, timeout);
                self.launch(Operation::RemoveWatch, statuses);
            }
            EpisodeDetailsAction::ClearError => {
                self.dispatch(EpisodeDetailsIntent::MessageChanged { message: None });
                self.messages.clear_current();
            }
        }
    }

    fn refresh(&self, from_user_interaction: bool) {
        let episode_id = self.state.borrow().episode_id;
        tracing::info!(%episode_id, from_user_interaction, "Refreshing episode details");
        let params = UpdateEpisodeDetailsParams {
            episode_id,
            from_user_interaction,
        };
        let statuses = invoke(
            self.collaborators.update_details.clone(),
            params,
            self.settings.interactor_timeout,
        );
        self.launch(Operation::Refresh, statuses);
    }

    fn on_status(&mut self, operation: Operation, status: InvokeStatus) {
        if let InvokeStatus::Error(err) = &status {
            tracing::warn!(operation = operation.name(), error = %err, "Operation failed");
            self.messages.emit(UiMessage::from_error(operation.name(), err));
        }
        if status.is_terminal() {
            self.loading.remove_loader();
        } else {
            self.loading.add_loader();
        }
        self.dispatch(EpisodeDetailsIntent::LoadingChanged {
            refreshing: self.loading.is_loading(),
        });
    }

    fn dispatch(&mut self, intent: EpisodeDetailsIntent) {
        self.state
            .send_if_modified(|state| EpisodeDetailsReducer::apply(state, intent));
    }

    fn launch(&self, operation: Operation, statuses: StatusStream) {
        self.forward(statuses.map(move |status| ScreenEvent::Status { operation, status }));
    }

    /// Pump `feed` into the owner channel until the feed or the screen ends.
    fn forward<S>(&self, feed: S)
    where
        S: Stream<Item = ScreenEvent> + Send + 'static,
    {
        let events = self.events.clone();
        self.lifetime.spawn(async move {
            let mut feed = pin!(feed);
            while let Some(event) = feed.next().await {
                if events.send(event).is_err() {
                    break;
                }
            }
        });
    }
}
