//! Player, standings and match data models.

use super::errors::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type, assigned serially by the store at registration
pub type PlayerId = i64;

/// Match ID type
pub type MatchId = i64;

/// Registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID
    pub id: PlayerId,
    /// Display name (need not be unique)
    pub name: String,
}

/// One row of the standings table.
///
/// Derived from players and match results on every query; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    /// Player ID
    pub id: PlayerId,
    /// Player name as registered
    pub name: String,
    /// Matches won
    pub wins: u32,
    /// Matches played
    pub matches: u32,
}

impl StandingEntry {
    pub fn new(id: PlayerId, name: impl Into<String>, wins: u32, matches: u32) -> Self {
        Self {
            id,
            name: name.into(),
            wins,
            matches,
        }
    }

    /// Entry for a player who has not played yet
    pub fn unplayed(player: &Player) -> Self {
        Self::new(player.id, player.name.clone(), 0, 0)
    }

    /// Build an entry from raw aggregate counts read from storage
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CorruptStanding` unless `matches >= wins >= 0`
    /// and both counts fit in a `u32`
    pub fn from_counts(
        id: PlayerId,
        name: impl Into<String>,
        wins: i64,
        matches: i64,
    ) -> StoreResult<Self> {
        let corrupt = || StoreError::CorruptStanding { id, wins, matches };

        let entry = Self::new(
            id,
            name,
            u32::try_from(wins).map_err(|_| corrupt())?,
            u32::try_from(matches).map_err(|_| corrupt())?,
        );

        if !entry.is_consistent() {
            return Err(corrupt());
        }
        Ok(entry)
    }

    /// A player cannot have won more matches than they played
    pub fn is_consistent(&self) -> bool {
        self.wins <= self.matches
    }
}

/// Outcome of a single reported match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Match ID
    pub id: MatchId,
    /// Winning player
    pub winner_id: PlayerId,
    /// Losing player
    pub loser_id: PlayerId,
    /// When the result was recorded
    pub played_at: DateTime<Utc>,
}

/// Rank standings by wins, highest first, then by player ID.
///
/// Player IDs are handed out in registration order, so ties keep
/// registration order.
pub fn rank_standings(standings: &mut [StandingEntry]) {
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unplayed_entry_has_zero_record() {
        let player = Player {
            id: 3,
            name: "Carol".to_string(),
        };
        let entry = StandingEntry::unplayed(&player);
        assert_eq!(entry, StandingEntry::new(3, "Carol", 0, 0));
        assert!(entry.is_consistent());
    }

    #[test]
    fn test_inconsistent_entry() {
        assert!(!StandingEntry::new(1, "A", 3, 2).is_consistent());
    }

    #[test]
    fn test_from_counts_valid() {
        let entry = StandingEntry::from_counts(5, "Eve", 2, 3).unwrap();
        assert_eq!(entry, StandingEntry::new(5, "Eve", 2, 3));

        let entry = StandingEntry::from_counts(6, "Fay", 0, 0).unwrap();
        assert_eq!(entry, StandingEntry::new(6, "Fay", 0, 0));
    }

    #[test]
    fn test_from_counts_more_wins_than_matches() {
        let err = StandingEntry::from_counts(5, "Eve", 4, 3).unwrap_err();
        assert!(matches!(
            err,
            StoreError::CorruptStanding { id: 5, wins: 4, matches: 3 }
        ));
    }

    #[test]
    fn test_from_counts_negative_wins() {
        let err = StandingEntry::from_counts(5, "Eve", -1, 3).unwrap_err();
        assert!(matches!(
            err,
            StoreError::CorruptStanding { id: 5, wins: -1, matches: 3 }
        ));
    }

    #[test]
    fn test_from_counts_above_u32_max() {
        let too_many = i64::from(u32::MAX) + 1;

        let err = StandingEntry::from_counts(5, "Eve", 0, too_many).unwrap_err();
        assert!(matches!(err, StoreError::CorruptStanding { matches, .. } if matches == too_many));

        let err = StandingEntry::from_counts(5, "Eve", too_many, too_many).unwrap_err();
        assert!(matches!(err, StoreError::CorruptStanding { wins, .. } if wins == too_many));
    }

    #[test]
    fn test_rank_standings_by_wins_then_id() {
        let mut standings = vec![
            StandingEntry::new(4, "D", 1, 2),
            StandingEntry::new(2, "B", 2, 2),
            StandingEntry::new(3, "C", 0, 2),
            StandingEntry::new(1, "A", 1, 2),
        ];

        rank_standings(&mut standings);

        let ids: Vec<_> = standings.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1, 4, 3]);
    }
}
