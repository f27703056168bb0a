//! In-process tournament store.
//!
//! Keeps players and matches in memory behind a mutex. Useful for tests and
//! for running a tournament without a database.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::errors::{StoreError, StoreResult};
use super::models::{MatchId, MatchRecord, Player, PlayerId, StandingEntry, rank_standings};
use super::provider::{StandingsProvider, TournamentStore};

#[derive(Debug)]
struct State {
    players: BTreeMap<PlayerId, Player>,
    matches: Vec<MatchRecord>,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

/// Memory-backed implementation of [`TournamentStore`]
#[derive(Debug)]
pub struct InMemoryTournamentStore {
    state: Mutex<State>,
}

impl Default for InMemoryTournamentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTournamentStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                players: BTreeMap::new(),
                matches: Vec::new(),
                next_player_id: 1,
                next_match_id: 1,
            }),
        }
    }

    /// Number of recorded matches
    pub fn match_count(&self) -> usize {
        self.lock().matches.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // State is never left half-updated, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl StandingsProvider for InMemoryTournamentStore {
    async fn player_standings(&self) -> StoreResult<Vec<StandingEntry>> {
        let state = self.lock();

        let mut by_id: BTreeMap<PlayerId, StandingEntry> = state
            .players
            .values()
            .map(|player| (player.id, StandingEntry::unplayed(player)))
            .collect();

        for record in &state.matches {
            if let Some(winner) = by_id.get_mut(&record.winner_id) {
                winner.wins += 1;
                winner.matches += 1;
            }
            if let Some(loser) = by_id.get_mut(&record.loser_id) {
                loser.matches += 1;
            }
        }

        let mut standings: Vec<StandingEntry> = by_id.into_values().collect();
        rank_standings(&mut standings);
        Ok(standings)
    }
}

#[async_trait]
impl TournamentStore for InMemoryTournamentStore {
    async fn register_player(&self, name: &str) -> StoreResult<PlayerId> {
        let mut state = self.lock();
        let id = state.next_player_id;
        state.next_player_id += 1;
        state.players.insert(
            id,
            Player {
                id,
                name: name.to_string(),
            },
        );
        Ok(id)
    }

    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> StoreResult<MatchRecord> {
        let mut state = self.lock();

        for id in [winner, loser] {
            if !state.players.contains_key(&id) {
                return Err(StoreError::PlayerNotFound(id));
            }
        }

        let record = MatchRecord {
            id: state.next_match_id,
            winner_id: winner,
            loser_id: loser,
            played_at: Utc::now(),
        };
        state.next_match_id += 1;
        state.matches.push(record.clone());

        Ok(record)
    }

    async fn delete_matches(&self) -> StoreResult<u64> {
        let mut state = self.lock();
        let removed = state.matches.len() as u64;
        state.matches.clear();
        Ok(removed)
    }

    async fn delete_players(&self) -> StoreResult<u64> {
        let mut state = self.lock();
        let removed = state.players.len() as u64;
        state.players.clear();
        state.matches.clear();
        Ok(removed)
    }

    async fn count_players(&self) -> StoreResult<u64> {
        Ok(self.lock().players.len() as u64)
    }
}
