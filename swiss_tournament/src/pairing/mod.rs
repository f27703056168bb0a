//! Pairing engine for Swiss-system rounds.
//!
//! Players are paired with their neighbour in the standings: first with
//! second, third with fourth, and so on. Because the standings are ranked
//! by wins this puts players of equal or nearly equal record against each
//! other. The engine is a pure function of the standings snapshot it is
//! given and holds no state between calls.
//!
//! ## Example
//!
//! ```
//! use swiss_tournament::pairing::{generate_pairings, PairingError};
//! use swiss_tournament::store::StandingEntry;
//!
//! let odd = vec![
//!     StandingEntry::new(1, "A", 0, 0),
//!     StandingEntry::new(2, "B", 0, 0),
//!     StandingEntry::new(3, "C", 0, 0),
//! ];
//!
//! assert_eq!(
//!     generate_pairings(&odd),
//!     Err(PairingError::OddPlayerCount { count: 3 })
//! );
//! ```

pub mod engine;
pub mod errors;
pub mod models;

pub use engine::generate_pairings;
pub use errors::{PairingError, PairingResult};
pub use models::Pairing;
