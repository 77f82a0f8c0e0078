use futures::future;
use futures::stream::{Stream, StreamExt};
use tokio_stream::wrappers::WatchStream;

use super::store::EpisodeLibrary;
use crate::domain::{EpisodeDetails, EpisodeId, EpisodeWatchEntry};
use crate::interactor::{FeedStream, SubjectObserver};

/// Feed of the episode and its season, re-read on every library change.
pub struct ObserveEpisodeDetails {
    library: EpisodeLibrary,
}

impl ObserveEpisodeDetails {
    pub fn new(library: EpisodeLibrary) -> Self {
        Self { library }
    }
}

impl SubjectObserver<EpisodeId, EpisodeDetails> for ObserveEpisodeDetails {
    fn observe(&self, episode_id: EpisodeId) -> FeedStream<EpisodeDetails> {
        let library = self.library.clone();
        let feed = WatchStream::new(self.library.changes()).map(move |_| library.details(episode_id));
        distinct_until_changed(feed)
    }
}

/// Feed of an episode's watch history.
pub struct ObserveEpisodeWatches {
    library: EpisodeLibrary,
}

impl ObserveEpisodeWatches {
    pub fn new(library: EpisodeLibrary) -> Self {
        Self { library }
    }
}

impl SubjectObserver<EpisodeId, Vec<EpisodeWatchEntry>> for ObserveEpisodeWatches {
    fn observe(&self, episode_id: EpisodeId) -> FeedStream<Vec<EpisodeWatchEntry>> {
        let library = self.library.clone();
        let feed =
            WatchStream::new(self.library.changes()).map(move |_| library.watches_for(episode_id));
        distinct_until_changed(feed)
    }
}

/// Drop values equal to the one emitted just before.
fn distinct_until_changed<S, T>(feed: S) -> FeedStream<T>
where
    S: Stream<Item = T> + Send + 'static,
    T: PartialEq + Clone + Send + 'static,
{
    let mut last: Option<T> = None;
    feed.filter_map(move |value| {
        let changed = last.as_ref() != Some(&value);
        if changed {
            last = Some(value.clone());
        }
        future::ready(changed.then_some(value))
    })
    .boxed()
}
