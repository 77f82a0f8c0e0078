//! Contracts for the collaborators the screen drives.
//!
//! - [`SubjectObserver`] exposes a continuously-updating read-only feed.
//! - [`Interactor`] performs one discrete operation; [`invoke`] adapts a run
//!   into a stream of [`InvokeStatus`] values.

mod params;
mod status;
mod traits;

pub use params::{
    AddEpisodeWatchParams, RemoveEpisodeWatchParams, RemoveEpisodeWatchesParams,
    UpdateEpisodeDetailsParams,
};
pub use status::{invoke, InvokeStatus, StatusStream};
pub use traits::{FeedStream, Interactor, SubjectObserver};
