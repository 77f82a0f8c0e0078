use crate::ui::mvi::Reducer;

use super::intent::EpisodeDetailsIntent;
use super::state::EpisodeDetailsViewState;

pub struct EpisodeDetailsReducer;

impl Reducer for EpisodeDetailsReducer {
    type State = EpisodeDetailsViewState;
    type Intent = EpisodeDetailsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EpisodeDetailsIntent::DetailsLoaded { details, now } => EpisodeDetailsViewState {
                can_add_watch: details.can_add_watch(now),
                episode: details.episode,
                season: details.season,
                ..state
            },
            EpisodeDetailsIntent::WatchesLoaded { watches } => {
                EpisodeDetailsViewState { watches, ..state }
            }
            EpisodeDetailsIntent::LoadingChanged { refreshing } => {
                EpisodeDetailsViewState { refreshing, ..state }
            }
            EpisodeDetailsIntent::MessageChanged { message } => {
                EpisodeDetailsViewState { message, ..state }
            }
        }
    }
}
