use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use showtrack::cli::{parse_command, render_state, Cli, Command, HELP};
use showtrack::config::Config;
use showtrack::library::LibrarySeed;
use showtrack::logging::init_tracing;
use showtrack::messages::UiMessageManager;
use showtrack::ui::episode_details::{EpisodeDetailsScreen, ScreenSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    init_tracing(&config.logging);

    let seed = match &cli.seed {
        Some(path) => LibrarySeed::from_path(path).context("loading seed")?,
        None => LibrarySeed::demo().context("loading built-in seed")?,
    };
    let (library, source) = seed.build(Duration::from_millis(cli.latency_ms));

    let messages = UiMessageManager::spawn(&config.messages);
    let screen = EpisodeDetailsScreen::open(
        cli.episode_id.as_deref(),
        library.collaborators(Arc::new(source)),
        &messages,
        ScreenSettings::from(&config.screen),
    )?;

    let mut updates = screen.subscribe();
    println!("{}", render_state(&updates.borrow_and_update(), cli.json)?);
    eprintln!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                println!("{}", render_state(&state, cli.json)?);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(Command::Action(action))) => screen.submit(action)?,
                    Ok(Some(Command::Help)) => eprintln!("{HELP}"),
                    Ok(Some(Command::Quit)) => break,
                    Ok(None) => {}
                    Err(err) => eprintln!("{err}"),
                }
            }
        }
    }

    screen.close();
    Ok(())
}
