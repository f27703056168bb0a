//! # Swiss Tournament
//!
//! Player registration, match reporting, standings and next-round pairings for
//! a Swiss-system tournament.
//!
//! Every round, players are ranked by wins and each one is drawn against the
//! neighbour in the ranking, so players with equal or nearly equal records
//! meet. Nobody is eliminated.
//!
//! ## Core Modules
//!
//! - [`pairing`]: Pure pairing engine over a standings snapshot
//! - [`store`]: Player and match persistence (PostgreSQL and in-memory)
//! - [`tournament`]: Manager combining a store with the pairing engine
//! - [`db`]: Connection pool, configuration and query timeouts
//!
//! ## Example
//!
//! ```
//! use swiss_tournament::{StandingEntry, generate_pairings};
//!
//! let standings = vec![
//!     StandingEntry::new(1, "A", 2, 2),
//!     StandingEntry::new(2, "B", 2, 2),
//!     StandingEntry::new(3, "C", 1, 2),
//!     StandingEntry::new(4, "D", 0, 2),
//! ];
//!
//! let pairings = generate_pairings(&standings).unwrap();
//! assert_eq!(pairings[0].to_string(), "A (#1) vs B (#2)");
//! assert_eq!(pairings[1].to_string(), "C (#3) vs D (#4)");
//! ```

/// Database connection pooling, configuration and timeouts.
pub mod db;

/// Adjacent-rank pairing engine.
pub mod pairing;
pub use pairing::{Pairing, PairingError, generate_pairings};

/// Player and match persistence.
pub mod store;
pub use store::{MatchRecord, Player, PlayerId, StandingEntry};

/// Tournament management.
pub mod tournament;
pub use tournament::{TournamentError, TournamentManager};
