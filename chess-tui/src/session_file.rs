use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse session file: {0}")]
    Json(#[from] serde_json::Error),
}

/// The position left on the board when the program last quit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedSession {
    pub fen: String,
    pub timestamp: String,
}

impl SavedSession {
    /// Stamp `fen` with the current time in seconds since the Unix epoch.
    pub fn capture(fen: &str) -> Self {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        Self {
            fen: fen.to_string(),
            timestamp: seconds.to_string(),
        }
    }
}

/// Path of the session file inside `dir`.
pub fn session_file_path(dir: &Path) -> PathBuf {
    dir.join(SESSION_FILE_NAME)
}

/// Save a session to `dir`, creating the directory if needed.
pub fn save_session(session: &SavedSession, dir: &Path) -> Result<PathBuf, SessionError> {
    std::fs::create_dir_all(dir).map_err(|source| SessionError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = session_file_path(dir);
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(&path, json).map_err(|source| SessionError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Load the session saved in `dir`, if one exists.
pub fn load_session(dir: &Path) -> Result<Option<SavedSession>, SessionError> {
    let path = session_file_path(dir);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|source| SessionError::Io {
        path: path.clone(),
        source,
    })?;
    let session: SavedSession = serde_json::from_str(&contents)?;

    Ok(Some(session))
}

/// Delete the session file in `dir`. Missing files are not an error.
pub fn clear_saved_session(dir: &Path) -> Result<(), SessionError> {
    let path = session_file_path(dir);
    if path.exists() {
        std::fs::remove_file(&path).map_err(|source| SessionError::Io {
            path: path.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> SavedSession {
        SavedSession {
            fen: "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq 45".to_string(),
            timestamp: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let session = sample_session();

        let path = save_session(&session, dir.path()).unwrap();
        assert!(path.exists());
        assert_eq!(path, session_file_path(dir.path()));

        let loaded = load_session(dir.path()).unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("deeper");

        save_session(&sample_session(), &nested).unwrap();
        assert!(session_file_path(&nested).exists());
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_session(dir.path()).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(session_file_path(dir.path()), "{ not json").unwrap();

        let err = load_session(dir.path()).unwrap_err();
        assert!(matches!(err, SessionError::Json(_)));
        assert!(err.to_string().starts_with("Failed to parse session file"));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        save_session(&sample_session(), dir.path()).unwrap();
        clear_saved_session(dir.path()).unwrap();

        assert_eq!(load_session(dir.path()).unwrap(), None);
        clear_saved_session(dir.path()).unwrap();
    }

    #[test]
    fn test_capture_stamps_current_time() {
        let session = SavedSession::capture("8/8/8/8/8/8/8/8 w - -");
        assert_eq!(session.fen, "8/8/8/8/8/8/8/8 w - -");
        assert!(session.timestamp.parse::<u64>().unwrap() > 0);

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"fen\""));
        assert!(json.contains("\"timestamp\""));
    }
}
