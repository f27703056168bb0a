//! Store trait definitions for testability and dependency injection.
//!
//! The pairing engine only ever needs a standings snapshot, so that read is
//! split out into [`StandingsProvider`]. Everything that mutates players and
//! match results lives on [`TournamentStore`].

use async_trait::async_trait;

use super::errors::StoreResult;
use super::models::{MatchRecord, PlayerId, StandingEntry};

/// Source of ranked standings
#[async_trait]
pub trait StandingsProvider: Send + Sync {
    /// Current standings, sorted by wins descending then player ID.
    ///
    /// Players without any match appear with zero wins and zero matches.
    async fn player_standings(&self) -> StoreResult<Vec<StandingEntry>>;
}

/// Persistence for players and match outcomes
#[async_trait]
pub trait TournamentStore: StandingsProvider {
    /// Register a player and return the assigned ID
    async fn register_player(&self, name: &str) -> StoreResult<PlayerId>;

    /// Record that `winner` beat `loser`
    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> StoreResult<MatchRecord>;

    /// Remove all match records, returning how many matches were removed
    async fn delete_matches(&self) -> StoreResult<u64>;

    /// Remove all players together with their matches, returning how many
    /// players were removed
    async fn delete_players(&self) -> StoreResult<u64>;

    /// Number of registered players
    async fn count_players(&self) -> StoreResult<u64>;
}
