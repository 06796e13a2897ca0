//! Strictly Tic-Tac-Toe - Unified CLI

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{Config, Snapshot, parse_moves, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The log filter and file come from the config, so it is read first
    // and reported once the subscriber is up.
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config, &cli.command)?;
    log_config(&config);

    match cli.command {
        Command::Play => tui::run(&config),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Builds the log filter, preferring `RUST_LOG` over the config.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Installs the global subscriber for `command`.
///
/// The interactive board owns the terminal, so it logs to the configured
/// file; everything else logs to stderr.
fn init_tracing(config: &Config, command: &Command) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));
    match command {
        Command::Play => {
            let log_file = std::fs::File::create(config.log_file())?;
            let _ = builder
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
        Command::Replay { .. } => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
    Ok(())
}

/// Records the settings this run uses.
fn log_config(config: &Config) {
    info!(
        log_file = %config.log_file().display(),
        log_filter = %config.log_filter(),
        show_hints = *config.show_hints(),
        "Config loaded"
    );
}

/// Replay a move list headlessly
#[instrument]
fn run_replay(moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    info!(count = moves.len(), "Replaying moves");
    let state = replay(&moves);
    let snapshot = Snapshot::from(&state);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", state.grid().display());
        println!();
        println!("{}", snapshot.status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_config_is_logged_through_subscriber() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = Config::from_toml("log_filter = \"debug\"").expect("config parses");
        tracing::subscriber::with_default(subscriber, || log_config(&config));

        let output = String::from_utf8(captured.0.lock().expect("log buffer").clone())
            .expect("utf-8 log");
        assert!(output.contains("Config loaded"), "{output}");
        assert!(output.contains("log_filter=debug"), "{output}");
    }
}
