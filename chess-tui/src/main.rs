mod config;
mod history;
mod input;
mod session_file;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::Context;
use chess::{Board, START_FEN};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::session_file::SavedSession;
use crate::ui::{theme::Theme, App};

#[derive(Parser, Debug)]
#[command(name = "chess-tui", version, about = "Cursor-driven chess in the terminal")]
struct Cli {
    /// Start from this positional record instead of the saved session
    #[arg(long)]
    fen: Option<String>,

    /// Ignore the saved session and start a new game
    #[arg(long)]
    new: bool,

    /// Directory for the rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing with file output; the terminal belongs to the UI.
    let log_dir = cli.log_dir.clone().unwrap_or_else(config::get_log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "chess-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("chess-tui starting up");

    let session_dir = config::get_session_dir();
    let record = starting_record(&cli, &session_dir)?;
    let theme = Theme::from_preference(config::get_theme_preference().as_deref());
    let mut app = App::new(&record, theme).context("Starting position is invalid")?;

    ui::run_app(&mut app)?;

    match session_file::save_session(&SavedSession::capture(app.session_record()), &session_dir) {
        Ok(path) => tracing::info!(path = %path.display(), "Session saved"),
        Err(e) => tracing::warn!("Failed to save session: {}", e),
    }

    tracing::info!("chess-tui shutting down");
    Ok(())
}

/// Pick the record to start from.
///
/// Priority:
/// 1. `--fen` (an invalid record is an error)
/// 2. the saved session, unless `--new` discards it (an invalid session is logged and skipped)
/// 3. `CHESS_TUI_START_FEN` (an invalid record is logged and skipped)
/// 4. the standard starting position
fn starting_record(cli: &Cli, session_dir: &Path) -> anyhow::Result<String> {
    if let Some(fen) = &cli.fen {
        Board::from_fen(fen).with_context(|| format!("Invalid --fen record: {fen}"))?;
        return Ok(fen.clone());
    }

    if cli.new {
        if let Err(e) = session_file::clear_saved_session(session_dir) {
            tracing::warn!("Failed to discard saved session: {}", e);
        }
    } else if let Some(fen) = saved_record(session_dir) {
        return Ok(fen);
    }

    let fen = config::get_start_fen();
    match Board::from_fen(&fen) {
        Ok(_) => Ok(fen),
        Err(e) => {
            tracing::warn!(record = %fen, "Ignoring CHESS_TUI_START_FEN: {}", e);
            Ok(START_FEN.to_string())
        }
    }
}

fn saved_record(session_dir: &Path) -> Option<String> {
    let session = match session_file::load_session(session_dir) {
        Ok(session) => session?,
        Err(e) => {
            tracing::warn!("Ignoring saved session: {}", e);
            return None;
        }
    };

    match Board::from_fen(&session.fen) {
        Ok(_) => {
            tracing::info!(saved_at = %session.timestamp, "Resuming saved session");
            Some(session.fen)
        }
        Err(e) => {
            tracing::warn!(record = %session.fen, "Saved session holds an invalid record: {}", e);
            None
        }
    }
}
