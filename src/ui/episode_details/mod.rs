//! Episode details screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - View state snapshot
//! - `action.rs` - User actions submitted by the presentation layer
//! - `intent.rs` - Feed emissions and status changes folded into state
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `loading.rs` - Pending-operation counter behind the loading flag
//! - `screen.rs` - Owner task wiring feeds, actions and operations together

mod action;
mod intent;
mod loading;
mod reducer;
mod screen;
mod state;

pub use action::EpisodeDetailsAction;
pub use intent::EpisodeDetailsIntent;
pub use loading::LoadingCounter;
pub use reducer::EpisodeDetailsReducer;
pub use screen::{EpisodeDetailsCollaborators, EpisodeDetailsScreen, Operation, ScreenSettings};
pub use state::EpisodeDetailsViewState;
