//! Engine error types

use thiserror::Error;

/// Errors from the game-data registry.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("unknown champion: {0}")]
    ChampionNotFound(String),
    #[error("unknown item: {0}")]
    ItemNotFound(String),
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from build session events.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("inventory is full ({capacity} slots)")]
    ItemSlotsFull { capacity: usize },
}
