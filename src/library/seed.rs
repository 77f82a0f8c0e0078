use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::source::StaticEpisodeSource;
use super::store::EpisodeLibrary;
use crate::domain::{Episode, EpisodeWatchEntry, Season, WatchId};

const DEMO_SEED: &str = r#"
[[seasons]]
id = 10
show_title = "The Expanse"
number = 1
title = "Season 1"

[[episodes]]
id = 42
season_id = 10
number = 1
title = "Dulcinea"
summary = "A detective on Ceres searches for a missing woman."
first_aired = "2015-11-23T21:00:00Z"

[[episodes]]
id = 43
season_id = 10
number = 2
title = "The Big Empty"
first_aired = "2099-11-30T21:00:00Z"

[[watches]]
id = 1
episode_id = 42
watched_at = "2016-01-10T20:30:00Z"
"#;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Episode {episode} refers to unknown season {season}")]
    UnknownSeason { episode: String, season: String },

    #[error("Watch id {0} leaves no room for new watches")]
    WatchIdOutOfRange(WatchId),
}

/// Initial catalogue and watch history, loaded from TOML.
///
/// Episodes and seasons go to the refresh source; the library starts with the
/// watch history only, so details appear after the first refresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrarySeed {
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub watches: Vec<EpisodeWatchEntry>,
}

impl LibrarySeed {
    /// Small built-in catalogue for trying the screen out.
    pub fn demo() -> Result<Self, SeedError> {
        Self::from_toml_str(DEMO_SEED)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SeedError> {
        let seed: LibrarySeed = toml::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), SeedError> {
        let seasons: HashSet<_> = self.seasons.iter().map(|season| season.id).collect();
        for episode in &self.episodes {
            if !seasons.contains(&episode.season_id) {
                return Err(SeedError::UnknownSeason {
                    episode: episode.id.to_string(),
                    season: episode.season_id.to_string(),
                });
            }
        }
        if let Some(entry) = self.watches.iter().find(|entry| entry.id.0 == i64::MAX) {
            return Err(SeedError::WatchIdOutOfRange(entry.id));
        }
        Ok(())
    }

    /// Build the library and a source that answers refreshes after `latency`.
    pub fn build(&self, latency: Duration) -> (EpisodeLibrary, StaticEpisodeSource) {
        let library = EpisodeLibrary::new();
        for entry in &self.watches {
            library.insert_watch(entry.clone());
        }

        let mut source = StaticEpisodeSource::new().with_latency(latency);
        for episode in &self.episodes {
            if let Some(season) = self.seasons.iter().find(|season| season.id == episode.season_id) {
                source.insert(episode.clone(), season.clone());
            }
        }
        (library, source)
    }
}
