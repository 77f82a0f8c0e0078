//! State core for an episode details screen.
//!
//! A single owner task per screen folds data-feed emissions, user actions and
//! operation statuses into an immutable [`ui::episode_details::EpisodeDetailsViewState`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod interactor;
pub mod library;
pub mod lifetime;
pub mod logging;
pub mod messages;
pub mod ui;
