//! Tournament module for Swiss-system rounds.
//!
//! This module provides tournament management functionality including:
//! - Player registration
//! - Match result reporting
//! - Standings by win record
//! - Next-round pairings
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::{Database, DatabaseConfig};
//! use swiss_tournament::store::PgTournamentStore;
//! use swiss_tournament::tournament::TournamentManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let db = Database::new(&config).await?;
//!     let store = PgTournamentStore::new(Arc::new(db.pool().clone()))
//!         .with_query_timeout(config.query_timeout());
//!     let tournament = TournamentManager::new(Arc::new(store));
//!
//!     for pairing in tournament.swiss_pairings().await? {
//!         println!("{}", pairing);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod manager;

pub use manager::{TournamentError, TournamentManager, TournamentResult};
