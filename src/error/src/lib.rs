//! Game error handling.
//!
//! Covers the failures the game can hit at runtime: bad menu/action input,
//! a save file that cannot be written or read, a corrupted save, and a
//! closed console.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while the game is running
#[derive(Debug, Error)]
pub enum GameError {
    /// Menu or combat selector that is not one of the listed options
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// Save file could not be opened or written
    #[error("Failed to open file for saving: {}", path.display())]
    SaveOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Save file could not be opened or read
    #[error("Failed to open file for loading: {}", path.display())]
    LoadOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Save file exists but does not hold a name and a health value
    #[error("Corrupted save data: {0}")]
    CorruptedSave(String),

    /// Console input reached end of stream
    #[error("Input closed")]
    InputClosed,
}

impl GameError {
    /// True for errors the player recovers from by simply trying again
    pub fn is_input_error(&self) -> bool {
        matches!(self, GameError::InvalidChoice(_))
    }
}

/// Convert a game error into a user-facing message
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::SaveOpen { source, .. } | GameError::LoadOpen { source, .. } => {
            match source.kind() {
                io::ErrorKind::NotFound => format!("{} (file does not exist)", error),
                io::ErrorKind::PermissionDenied => format!("{} (permission denied)", error),
                _ => format!("{} ({})", error, source),
            }
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported_plainly() {
        let err = GameError::LoadOpen {
            path: PathBuf::from("game_state.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            handle_error(&err),
            "Failed to open file for loading: game_state.txt (file does not exist)"
        );
    }

    #[test]
    fn permission_denied_on_save() {
        let err = GameError::SaveOpen {
            path: PathBuf::from("/locked/game_state.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        };
        assert!(handle_error(&err).ends_with("(permission denied)"));
    }

    #[test]
    fn only_invalid_choice_is_an_input_error() {
        assert!(GameError::InvalidChoice("9".into()).is_input_error());
        assert!(!GameError::InputClosed.is_input_error());
        assert!(!GameError::CorruptedSave("x".into()).is_input_error());
    }
}
