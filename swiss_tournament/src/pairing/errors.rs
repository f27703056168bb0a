//! Pairing error types.

use crate::store::PlayerId;
use thiserror::Error;

/// Pairing errors
///
/// Both variants are contract violations by the caller or the standings
/// source. Retrying with the same standings always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// Standings hold an odd number of players and byes are not assigned
    #[error("Cannot pair an odd number of players: {count}")]
    OddPlayerCount { count: usize },

    /// The same player appears more than once in the standings
    #[error("Player {0} appears more than once in the standings")]
    DuplicatePlayer(PlayerId),
}

/// Result type for pairing operations
pub type PairingResult<T> = Result<T, PairingError>;
