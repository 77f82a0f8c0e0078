mod common;

use std::sync::Arc;
use std::time::Duration;

use common::wait_for_state;
use showtrack::config::MessagesConfig;
use showtrack::domain::{EpisodeId, WatchId};
use showtrack::library::{EpisodeLibrary, LibrarySeed};
use showtrack::messages::UiMessageManager;
use showtrack::ui::episode_details::{EpisodeDetailsAction, EpisodeDetailsScreen, ScreenSettings};

fn open_demo(raw: &str) -> (EpisodeLibrary, EpisodeDetailsScreen) {
    let (library, source) = LibrarySeed::demo().unwrap().build(Duration::ZERO);
    let messages = UiMessageManager::spawn(&MessagesConfig::default());
    let screen = EpisodeDetailsScreen::open(
        Some(raw),
        library.collaborators(Arc::new(source)),
        &messages,
        ScreenSettings::default(),
    )
    .expect("screen opens");
    (library, screen)
}

#[tokio::test]
async fn aired_episode_loads_and_tracks_watches() {
    let (library, screen) = open_demo("42");
    let mut updates = screen.subscribe();

    let loaded = wait_for_state(&mut updates, |state| {
        state.episode.is_some() && !state.refreshing
    })
    .await;
    assert_eq!(loaded.episode.as_ref().map(|e| e.title.as_str()), Some("Dulcinea"));
    assert_eq!(loaded.season.as_ref().map(|s| s.show_title.as_str()), Some("The Expanse"));
    assert_eq!(loaded.watches.len(), 1);
    assert!(loaded.can_add_watch);
    assert!(loaded.message.is_none());

    screen.submit(EpisodeDetailsAction::AddWatch).unwrap();
    let added = wait_for_state(&mut updates, |state| state.watches.len() == 2).await;
    assert!(added.watches.iter().all(|w| w.episode_id == EpisodeId(42)));

    screen
        .submit(EpisodeDetailsAction::RemoveWatch { watch_id: WatchId(1) })
        .unwrap();
    let removed = wait_for_state(&mut updates, |state| state.watches.len() == 1).await;
    assert!(removed.watches.iter().all(|w| w.id != WatchId(1)));

    screen.submit(EpisodeDetailsAction::RemoveAllWatches).unwrap();
    wait_for_state(&mut updates, |state| state.watches.is_empty()).await;
    assert!(library.watches_for(EpisodeId(42)).is_empty());

    screen.close();
}

#[tokio::test]
async fn future_episode_cannot_be_watched() {
    let (_library, screen) = open_demo("43");
    let mut updates = screen.subscribe();

    let loaded = wait_for_state(&mut updates, |state| {
        state.episode.is_some() && !state.refreshing
    })
    .await;
    assert_eq!(loaded.episode.as_ref().map(|e| e.number), Some(2));
    assert!(!loaded.can_add_watch);
    assert!(loaded.watches.is_empty());

    screen.close();
}

#[tokio::test]
async fn unknown_episode_surfaces_message() {
    let (_library, screen) = open_demo("99");
    let mut updates = screen.subscribe();

    let failed = wait_for_state(&mut updates, |state| state.message.is_some()).await;
    let message = failed.message.expect("message shown");
    assert!(message.message.contains("Episode 99 not found"));
    assert!(failed.episode.is_none());

    wait_for_state(&mut updates, |state| !state.refreshing).await;

    screen.submit(EpisodeDetailsAction::ClearError).unwrap();
    wait_for_state(&mut updates, |state| state.message.is_none()).await;

    screen.close();
}
