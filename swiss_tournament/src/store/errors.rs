//! Store error types.

use super::models::PlayerId;
use crate::db::timeouts::TimeoutError;
use std::time::Duration;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Query did not complete in time
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// Player ID does not belong to any registered player
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// Stored results give a player more wins than matches
    #[error("Corrupt standing for player {id}: {wins} wins in {matches} matches")]
    CorruptStanding { id: PlayerId, wins: i64, matches: i64 },
}

impl From<TimeoutError> for StoreError {
    fn from(err: TimeoutError) -> Self {
        match err {
            TimeoutError::Timeout(duration) => StoreError::Timeout(duration),
            TimeoutError::Database(e) => StoreError::Database(e),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
