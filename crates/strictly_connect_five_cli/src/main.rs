//! Strictly Connect Five - terminal front end
//!
//! Renders boards as text, turns typed coordinates into moves and drives
//! the game core's history. All rules live in `strictly_connect_five`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod render;
mod report;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use strictly_connect_five::{Flat, Game, Stacked, Variant, VariantKind};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;
    initialize_tracing(config.log_filter());

    let variant = cli.variant.unwrap_or(*config.variant());
    info!(%variant, config_path = %cli.config.display(), "Starting Strictly Connect Five");

    match variant {
        VariantKind::Flat => run::<Flat>(cli.command),
        VariantKind::Stacked => run::<Stacked>(cli.command),
    }
}

/// Dispatches a subcommand for one board variant.
fn run<V: Variant>(command: Command) -> Result<()> {
    match command {
        Command::Play => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            session::run_interactive::<V>(stdin.lock(), stdout.lock())
        }
        Command::Replay { moves, jump, json } => run_replay::<V>(&moves, jump, json),
        Command::Lines { list } => run_lines::<V>(list),
    }
}

/// Applies scripted moves, optionally rewinds, and prints the result.
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay<V: Variant>(moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    let mut game = Game::<V>::new();

    for (n, raw) in moves.iter().enumerate() {
        let label = format!("Move #{} ({})", n + 1, raw);
        let coords = command::parse_coords(raw).context(label.clone())?;
        let index = V::index_of(&coords).context(label.clone())?;
        game.place(index).context(label)?;
    }

    if let Some(index) = jump {
        game.jump_to(index).context("Jump after replay")?;
    }

    if json {
        let report = report::GameReport::from_game(&game);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_game(&game)?);
    }
    Ok(())
}

/// Prints the winning-line table for a variant.
#[instrument]
fn run_lines<V: Variant>(list: bool) -> Result<()> {
    let lines = V::lines();
    println!("{}: {} winning lines", V::KIND, lines.len());

    if list {
        for line in lines {
            println!("{}", render::render_line::<V>(line)?);
        }
    }
    Ok(())
}

/// Installs the global subscriber, logging to stderr so board output stays clean.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
