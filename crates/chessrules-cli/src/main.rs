//! chessrules - interactive chess move validator.
//!
//! Reads moves from standard input, validates them against the current
//! position, and plays the legal ones.

mod command;
mod config;
mod render;
mod session;

use anyhow::Context;
use chessrules::decode;
use clap::Parser;
use config::CliConfig;
use session::Session;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Interactive chess move validator.
#[derive(Parser)]
#[command(name = "chessrules")]
#[command(about = "Validates chess moves typed at a prompt")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = CliConfig::default_path())]
    config: PathBuf,

    /// Starting position as FEN (overrides the config file)
    #[arg(long)]
    fen: Option<String>,

    /// Draw the board with letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = CliConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(fen) = args.fen {
        config.start_fen = fen;
    }
    if args.ascii {
        config.unicode = false;
    }

    let level = config.log_level.as_deref().unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Config: {:?}", args.config);
    tracing::info!("Start position: {}", config.start_fen);

    let board = decode(&config.start_fen)
        .with_context(|| format!("invalid start position '{}'", config.start_fen))?;

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout(), board, config.unicode);
    session.run()?;

    tracing::info!(
        "Session ended after {} moves at {}",
        session.history().len(),
        session.board().to_fen()
    );
    Ok(())
}
