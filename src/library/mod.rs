//! In-memory episode library implementing every collaborator the screen needs.

mod interactors;
mod observers;
mod seed;
mod source;
mod store;

pub use interactors::{AddEpisodeWatch, RemoveEpisodeWatch, RemoveEpisodeWatches, UpdateEpisodeDetails};
pub use observers::{ObserveEpisodeDetails, ObserveEpisodeWatches};
pub use seed::{LibrarySeed, SeedError};
pub use source::{EpisodeSource, StaticEpisodeSource};
pub use store::EpisodeLibrary;

use std::sync::Arc;

use crate::ui::episode_details::EpisodeDetailsCollaborators;

impl EpisodeLibrary {
    /// Wire interactors and observers over this library, refreshing from `source`.
    pub fn collaborators(&self, source: Arc<dyn EpisodeSource>) -> EpisodeDetailsCollaborators {
        EpisodeDetailsCollaborators {
            update_details: Arc::new(UpdateEpisodeDetails::new(self.clone(), source)),
            add_watch: Arc::new(AddEpisodeWatch::new(self.clone())),
            remove_watches: Arc::new(RemoveEpisodeWatches::new(self.clone())),
            remove_watch: Arc::new(RemoveEpisodeWatch::new(self.clone())),
            observe_details: Arc::new(ObserveEpisodeDetails::new(self.clone())),
            observe_watches: Arc::new(ObserveEpisodeWatches::new(self.clone())),
        }
    }
}
