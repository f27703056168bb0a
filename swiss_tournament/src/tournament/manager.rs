//! Tournament manager tying player records to next-round pairings.

use crate::pairing::{Pairing, PairingError, generate_pairings};
use crate::store::{MatchRecord, PlayerId, StandingEntry, StoreError, TournamentStore};
use std::sync::Arc;
use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Player name must not be empty")]
    InvalidPlayerName,

    #[error("Player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("Pairing error: {0}")]
    Pairing(#[from] PairingError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type TournamentResult<T> = Result<T, TournamentError>;

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    store: Arc<dyn TournamentStore>,
}

impl TournamentManager {
    /// Create a new tournament manager over the given store
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    /// Register a player and return the ID the store assigned
    ///
    /// Surrounding whitespace is trimmed; names need not be unique.
    pub async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidPlayerName);
        }

        let id = self.store.register_player(name).await?;
        log::info!("Registered player {} as #{}", name, id);

        Ok(id)
    }

    /// Record the outcome of a single match
    pub async fn report_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> TournamentResult<MatchRecord> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }

        let record = self.store.report_match(winner, loser).await?;
        log::info!(
            "Recorded match #{}: #{} beat #{}",
            record.id,
            winner,
            loser
        );

        Ok(record)
    }

    /// Current standings, best record first
    pub async fn player_standings(&self) -> TournamentResult<Vec<StandingEntry>> {
        Ok(self.store.player_standings().await?)
    }

    /// Number of registered players
    pub async fn count_players(&self) -> TournamentResult<u64> {
        Ok(self.store.count_players().await?)
    }

    /// Remove every match record
    pub async fn delete_matches(&self) -> TournamentResult<u64> {
        let removed = self.store.delete_matches().await?;
        log::info!("Deleted {} match(es)", removed);
        Ok(removed)
    }

    /// Remove every player together with their matches
    pub async fn delete_players(&self) -> TournamentResult<u64> {
        let removed = self.store.delete_players().await?;
        log::info!("Deleted {} player(s)", removed);
        Ok(removed)
    }

    /// Pair players for the next round.
    ///
    /// Reads a single standings snapshot and pairs neighbours in it.
    ///
    /// # Errors
    ///
    /// * `TournamentError::Pairing` - Odd number of players or a duplicated
    ///   player in the standings
    /// * `TournamentError::Store` - The standings could not be read
    pub async fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.store.player_standings().await?;

        match generate_pairings(&standings) {
            Ok(pairings) => {
                log::info!(
                    "Paired {} player(s) into {} match(es)",
                    standings.len(),
                    pairings.len()
                );
                Ok(pairings)
            }
            Err(e) => {
                log::warn!("Cannot pair next round: {}", e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryTournamentStore;

    fn manager() -> TournamentManager {
        TournamentManager::new(Arc::new(InMemoryTournamentStore::new()))
    }

    #[tokio::test]
    async fn test_register_trims_name() {
        let mgr = manager();
        let id = mgr.register_player("  Alice  ").await.unwrap();

        let standings = mgr.player_standings().await.unwrap();
        assert_eq!(standings[0].id, id);
        assert_eq!(standings[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_register_rejects_blank_name() {
        let mgr = manager();
        let err = mgr.register_player("   ").await.unwrap_err();
        assert!(matches!(err, TournamentError::InvalidPlayerName));
        assert_eq!(mgr.count_players().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_self_match_rejected() {
        let mgr = manager();
        let id = mgr.register_player("Alice").await.unwrap();

        let err = mgr.report_match(id, id).await.unwrap_err();
        assert!(matches!(err, TournamentError::SelfMatch(p) if p == id));
    }

    #[tokio::test]
    async fn test_unknown_player_surfaces_store_error() {
        let mgr = manager();
        let id = mgr.register_player("Alice").await.unwrap();

        let err = mgr.report_match(id, 42).await.unwrap_err();
        assert!(matches!(
            err,
            TournamentError::Store(StoreError::PlayerNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_pairings_with_no_players() {
        let mgr = manager();
        assert!(mgr.swiss_pairings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_pairings_with_odd_players() {
        let mgr = manager();
        for name in ["A", "B", "C"] {
            mgr.register_player(name).await.unwrap();
        }

        let err = mgr.swiss_pairings().await.unwrap_err();
        assert!(matches!(
            err,
            TournamentError::Pairing(PairingError::OddPlayerCount { count: 3 })
        ));
    }

    #[tokio::test]
    async fn test_first_round_pairs_in_registration_order() {
        let mgr = manager();
        let mut ids = Vec::new();
        for name in ["A", "B", "C", "D"] {
            ids.push(mgr.register_player(name).await.unwrap());
        }

        let pairings = mgr.swiss_pairings().await.unwrap();
        assert_eq!(pairings.len(), 2);
        assert_eq!(pairings[0].player_ids(), [ids[0], ids[1]]);
        assert_eq!(pairings[1].player_ids(), [ids[2], ids[3]]);
    }

    #[tokio::test]
    async fn test_winners_meet_after_first_round() {
        let mgr = manager();
        let a = mgr.register_player("A").await.unwrap();
        let b = mgr.register_player("B").await.unwrap();
        let c = mgr.register_player("C").await.unwrap();
        let d = mgr.register_player("D").await.unwrap();

        mgr.report_match(b, a).await.unwrap();
        mgr.report_match(d, c).await.unwrap();

        let pairings = mgr.swiss_pairings().await.unwrap();
        assert_eq!(pairings[0].player_ids(), [b, d]);
        assert_eq!(pairings[1].player_ids(), [a, c]);
    }

    #[tokio::test]
    async fn test_delete_players_resets_tournament() {
        let mgr = manager();
        let a = mgr.register_player("A").await.unwrap();
        let b = mgr.register_player("B").await.unwrap();
        mgr.report_match(a, b).await.unwrap();

        assert_eq!(mgr.delete_matches().await.unwrap(), 1);
        assert_eq!(mgr.delete_players().await.unwrap(), 2);
        assert_eq!(mgr.count_players().await.unwrap(), 0);
    }
}
