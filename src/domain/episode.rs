use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(pub i64);

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EpisodeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EpisodeId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(pub i64);

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EpisodeId,
    pub season_id: SeasonId,
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// When the episode first aired. Watches can only be added once this is in the past.
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
}

impl Episode {
    /// Whether the episode has aired strictly before `now`.
    ///
    /// An episode without an air date counts as aired.
    pub fn has_aired(&self, now: DateTime<Utc>) -> bool {
        self.first_aired.map_or(true, |aired| aired < now)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub show_title: String,
    pub number: u32,
    #[serde(default)]
    pub title: Option<String>,
}

/// One emission of the details feed: the episode and the season it belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EpisodeDetails {
    pub episode: Option<Episode>,
    pub season: Option<Season>,
}

impl EpisodeDetails {
    /// Derived "can register a new watch" flag for this record at `now`.
    pub fn can_add_watch(&self, now: DateTime<Utc>) -> bool {
        self.episode.as_ref().map_or(true, |episode| episode.has_aired(now))
    }
}
