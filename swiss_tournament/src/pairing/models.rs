//! Pairing data models.

use crate::store::{PlayerId, StandingEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two players drawn against each other for the next round.
///
/// `first` is always the higher-ranked of the two in the standings the
/// pairing was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Higher-ranked player's ID
    pub first_id: PlayerId,
    /// Higher-ranked player's name
    pub first_name: String,
    /// Lower-ranked player's ID
    pub second_id: PlayerId,
    /// Lower-ranked player's name
    pub second_name: String,
}

impl Pairing {
    /// Build a pairing from two adjacent standings entries
    pub fn new(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            first_id: first.id,
            first_name: first.name.clone(),
            second_id: second.id,
            second_name: second.name.clone(),
        }
    }

    /// Both player IDs in rank order
    pub fn player_ids(&self) -> [PlayerId; 2] {
        [self.first_id, self.second_id]
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{}) vs {} (#{})",
            self.first_name, self.first_id, self.second_name, self.second_id
        )
    }
}
