//! Adjacent-rank pairing for the next Swiss round.

use super::{
    errors::{PairingError, PairingResult},
    models::Pairing,
};
use crate::store::StandingEntry;
use std::collections::HashSet;

/// Pair players for the next round from ranked standings.
///
/// The standings must already be sorted by descending wins with a stable
/// tie-break; no sorting happens here. Pairing `k` is always made of the
/// entries at ranks `2k` and `2k + 1`, so players meet whoever sits closest
/// to them in the table. Rematches are not avoided.
///
/// # Arguments
///
/// * `standings` - Ranked standings snapshot
///
/// # Returns
///
/// * `PairingResult<Vec<Pairing>>` - One pairing per two players, in rank order
///
/// # Errors
///
/// * `PairingError::OddPlayerCount` - The standings hold an odd number of players
/// * `PairingError::DuplicatePlayer` - A player ID occurs twice
///
/// # Example
///
/// ```
/// use swiss_tournament::pairing::generate_pairings;
/// use swiss_tournament::store::StandingEntry;
///
/// let standings = vec![
///     StandingEntry::new(1, "A", 2, 2),
///     StandingEntry::new(2, "B", 2, 2),
///     StandingEntry::new(3, "C", 1, 2),
///     StandingEntry::new(4, "D", 0, 2),
/// ];
///
/// let pairings = generate_pairings(&standings).unwrap();
/// assert_eq!(pairings.len(), 2);
/// assert_eq!(pairings[0].player_ids(), [1, 2]);
/// assert_eq!(pairings[1].player_ids(), [3, 4]);
/// ```
pub fn generate_pairings(standings: &[StandingEntry]) -> PairingResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(PairingError::OddPlayerCount {
            count: standings.len(),
        });
    }

    let mut seen = HashSet::with_capacity(standings.len());
    if let Some(duplicate) = standings.iter().find(|entry| !seen.insert(entry.id)) {
        return Err(PairingError::DuplicatePlayer(duplicate.id));
    }

    let pairings: Vec<Pairing> = standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect();

    log::debug!(
        "Generated {} pairing(s) from {} standing(s)",
        pairings.len(),
        standings.len()
    );

    Ok(pairings)
}
