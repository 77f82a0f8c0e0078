//! Episode domain records shared by the library and the screen.

mod episode;
mod watch;

pub use episode::{Episode, EpisodeDetails, EpisodeId, Season, SeasonId};
pub use watch::{EpisodeWatchEntry, WatchId};
