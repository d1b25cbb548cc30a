//! Referee CLI - plays and checks games from the terminal.
//!
//! `referee play` reads one command per line from stdin, so it works both
//! interactively and with a script piped in. `referee check` validates a
//! saved game file.

mod config;
mod session;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::RefereeConfig;
use referee_core::format_layout;
use session::{load_game, Command, Session};
use std::io::BufRead;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "referee")]
#[command(about = "Chess move referee with undo")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overriding the configuration file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game, one command per line on stdin
    Play {
        /// Resume a game saved with the 'save' command
        #[arg(long)]
        load: Option<PathBuf>,
    },
    /// Validate a saved game and print its final position
    Check {
        /// Saved game file
        file: PathBuf,
    },
}

fn init_logging(level: &str) {
    let parsed = tracing::Level::from_str(level).ok();
    tracing_subscriber::fmt()
        .with_max_level(parsed.unwrap_or(tracing::Level::INFO))
        .with_writer(std::io::stderr)
        .init();
    if parsed.is_none() {
        tracing::warn!("Unknown log level {:?}, using info", level);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(RefereeConfig::default_path);
    let config = RefereeConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level));
    tracing::debug!("Config: {:?}", config);

    match cli.command {
        Commands::Play { load } => {
            let game = match load {
                Some(path) => load_game(&path)?,
                None => config.new_game()?,
            };
            play(Session::new(game, config.coordinates))
        }
        Commands::Check { file } => {
            let game = load_game(&file).with_context(|| format!("checking {}", file.display()))?;
            println!(
                "ok: {} moves, {} to move",
                game.ply_count(),
                game.turn()
            );
            println!("start: {}", format_layout(game.start_board(), game.start_turn()));
            println!("final: {}", format_layout(game.board(), game.turn()));
            Ok(())
        }
    }
}

fn play(mut session: Session) -> anyhow::Result<()> {
    tracing::info!("Starting game");
    println!("{}", session.board_text());
    println!("type 'help' for commands");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match Command::from_str(line) {
            Ok(Command::Quit) => break,
            Ok(command) => match session.execute(command) {
                Ok(reply) => println!("{}", reply),
                Err(e) => eprintln!("error: {}", e),
            },
            Err(e) => eprintln!("error: {}", e),
        }
    }

    tracing::info!(plies = session.game().ply_count(), "Game finished");
    Ok(())
}
