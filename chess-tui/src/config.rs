//! Runtime configuration for the terminal front-end.
//!
//! Every tunable has a compile-time default and can be overridden through a
//! dedicated environment variable. Command-line flags take precedence over
//! both and are applied in `main`.

use std::path::PathBuf;

use chess::START_FEN;

/// Default directory for the rolling log files, relative to the working directory.
const DEFAULT_LOG_DIR: &str = "logs";

/// Session directory name under the user's home directory.
const DEFAULT_SESSION_DIR_NAME: &str = ".chess-tui";

/// Get the directory the log appender writes to.
///
/// Priority:
/// 1. `CHESS_TUI_LOG_DIR` env variable if set
/// 2. `logs` as fallback
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHESS_TUI_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Get the directory holding the saved session.
///
/// Priority:
/// 1. `CHESS_TUI_SESSION_DIR` env variable if set
/// 2. `~/.chess-tui` as fallback (or `./.chess-tui` without a home directory)
pub fn get_session_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHESS_TUI_SESSION_DIR") {
        return PathBuf::from(dir);
    }

    default_session_dir()
}

fn default_session_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_SESSION_DIR_NAME)
}

/// Get the record a new game starts from.
///
/// Priority:
/// 1. `CHESS_TUI_START_FEN` env variable if set and non-empty
/// 2. the standard starting position
///
/// The value is not validated here; callers parse it and fall back on failure.
pub fn get_start_fen() -> String {
    match std::env::var("CHESS_TUI_START_FEN") {
        Ok(fen) if !fen.trim().is_empty() => fen,
        _ => START_FEN.to_string(),
    }
}

/// Get the colour theme preference (`light` or `dark`).
///
/// Reads `CHESS_TUI_THEME`; unset means the default dark theme.
pub fn get_theme_preference() -> Option<String> {
    std::env::var("CHESS_TUI_THEME").ok()
}
