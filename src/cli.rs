//! Command-line surface of the `showtrack` binary.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::domain::WatchId;
use crate::ui::episode_details::{EpisodeDetailsAction, EpisodeDetailsViewState};

pub const HELP: &str = "commands: refresh | watch | unwatch-all | unwatch <id> | dismiss | help | quit";

#[derive(Debug, Parser)]
#[command(name = "showtrack", version, about = "Episode details screen driven from the terminal")]
pub struct Cli {
    /// Episode to open.
    pub episode_id: Option<String>,

    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// TOML seed with seasons, episodes and watches (defaults to a built-in demo).
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Print each state as a JSON line.
    #[arg(long)]
    pub json: bool,

    /// Simulated latency of the episode source, in milliseconds.
    #[arg(long, default_value_t = 300)]
    pub latency_ms: u64,
}

/// One line typed on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(EpisodeDetailsAction),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("unwatch needs a watch id")]
    MissingWatchId,

    #[error("'{0}' is not a watch id")]
    InvalidWatchId(String),
}

/// Parse a stdin line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb {
        "refresh" | "r" => Command::Action(EpisodeDetailsAction::Refresh),
        "watch" | "w" => Command::Action(EpisodeDetailsAction::AddWatch),
        "unwatch-all" => Command::Action(EpisodeDetailsAction::RemoveAllWatches),
        "unwatch" => {
            let raw = words.next().ok_or(CommandError::MissingWatchId)?;
            let id = raw
                .parse()
                .map_err(|_| CommandError::InvalidWatchId(raw.to_string()))?;
            Command::Action(EpisodeDetailsAction::RemoveWatch {
                watch_id: WatchId(id),
            })
        }
        "dismiss" | "d" => Command::Action(EpisodeDetailsAction::ClearError),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Format a snapshot for stdout.
pub fn render_state(state: &EpisodeDetailsViewState, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(state);
    }

    let mut header = match (&state.episode, &state.season) {
        (Some(episode), Some(season)) => format!(
            "{} S{:02}E{:02} \"{}\"",
            season.show_title, season.number, episode.number, episode.title
        ),
        (Some(episode), None) => format!("\"{}\"", episode.title),
        _ => format!("episode {} (not loaded)", state.episode_id),
    };
    if state.refreshing {
        header.push_str(" [loading]");
    }

    let mut lines = vec![
        header,
        format!(
            "  watches: {}  can add watch: {}",
            state.watches.len(),
            if state.can_add_watch { "yes" } else { "no" }
        ),
    ];
    lines.extend(
        state
            .watches
            .iter()
            .map(|entry| format!("    #{} at {}", entry.id, entry.watched_at.to_rfc3339())),
    );
    if let Some(message) = &state.message {
        lines.push(format!("  ! {}", message.message));
    }
    Ok(lines.join("\n"))
}
