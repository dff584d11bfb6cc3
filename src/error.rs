//! Error types for the collaborator boundary
//!
//! The simulation itself never fails; only start-up and configuration can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Display, controller or audio device could not be acquired
    #[error("Platform error: {0}")]
    Platform(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Settings(err.to_string())
    }
}
