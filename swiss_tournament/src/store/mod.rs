//! Player and match persistence behind a trait seam.
//!
//! This module provides:
//! - Player, standings and match models
//! - The [`StandingsProvider`] and [`TournamentStore`] traits
//! - A PostgreSQL store over an injected connection pool
//! - An in-memory store with identical ordering rules
//!
//! ## Example
//!
//! ```
//! use swiss_tournament::store::{InMemoryTournamentStore, StandingsProvider, TournamentStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemoryTournamentStore::new();
//!     let alice = store.register_player("Alice").await?;
//!     let bob = store.register_player("Bob").await?;
//!     store.report_match(bob, alice).await?;
//!
//!     let standings = store.player_standings().await?;
//!     assert_eq!(standings[0].id, bob);
//!     assert_eq!(standings[1].wins, 0);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod provider;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryTournamentStore;
pub use models::{MatchId, MatchRecord, Player, PlayerId, StandingEntry, rank_standings};
pub use postgres::PgTournamentStore;
pub use provider::{StandingsProvider, TournamentStore};
