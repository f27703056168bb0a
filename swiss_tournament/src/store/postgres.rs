//! PostgreSQL implementation of the tournament store.
#![allow(clippy::needless_raw_string_hashes)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::sync::Arc;
use std::time::Duration;

use super::errors::{StoreError, StoreResult};
use super::models::{MatchRecord, PlayerId, StandingEntry};
use super::provider::{StandingsProvider, TournamentStore};
use crate::db::timeouts::{DEFAULT_QUERY_TIMEOUT, with_timeout};

/// Tournament store backed by a shared connection pool.
///
/// The pool is injected by the caller. Every operation checks out one
/// connection (or opens one transaction) for its whole duration and each
/// statement runs under the configured query timeout.
#[derive(Clone)]
pub struct PgTournamentStore {
    pool: Arc<PgPool>,
    query_timeout: Duration,
}

impl PgTournamentStore {
    /// Create a new store over an existing pool
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Override the per-statement timeout
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    fn decode_standing(row: &sqlx::postgres::PgRow) -> StoreResult<StandingEntry> {
        StandingEntry::from_counts(
            row.get("id"),
            row.get::<String, _>("name"),
            row.get("wins"),
            row.get("matches"),
        )
    }
}

#[async_trait]
impl StandingsProvider for PgTournamentStore {
    async fn player_standings(&self) -> StoreResult<Vec<StandingEntry>> {
        let rows = with_timeout(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, name, wins, matches
                FROM current_standings
                ORDER BY wins DESC, id ASC
                "#,
            )
            .fetch_all(self.pool.as_ref()),
        )
        .await?;

        rows.iter().map(Self::decode_standing).collect()
    }
}

#[async_trait]
impl TournamentStore for PgTournamentStore {
    async fn register_player(&self, name: &str) -> StoreResult<PlayerId> {
        let row = with_timeout(
            self.query_timeout,
            sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(row.get("id"))
    }

    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> StoreResult<MatchRecord> {
        let mut tx = with_timeout(self.query_timeout, self.pool.begin()).await?;

        let known: Vec<PlayerId> = with_timeout(
            self.query_timeout,
            sqlx::query_scalar("SELECT id FROM players WHERE id = ANY($1)")
                .bind(vec![winner, loser])
                .fetch_all(&mut *tx),
        )
        .await?;

        for id in [winner, loser] {
            if !known.contains(&id) {
                return Err(StoreError::PlayerNotFound(id));
            }
        }

        let row = with_timeout(
            self.query_timeout,
            sqlx::query(
                r#"
                INSERT INTO matches (winner_id, loser_id)
                VALUES ($1, $2)
                RETURNING id, played_at
                "#,
            )
            .bind(winner)
            .bind(loser)
            .fetch_one(&mut *tx),
        )
        .await?;

        let match_id: i64 = row.get("id");
        let played_at: DateTime<Utc> = row.get("played_at");

        with_timeout(
            self.query_timeout,
            sqlx::query(
                r#"
                INSERT INTO match_results (match_id, player_id, result)
                VALUES ($1, $2, 'win'), ($1, $3, 'loss')
                "#,
            )
            .bind(match_id)
            .bind(winner)
            .bind(loser)
            .execute(&mut *tx),
        )
        .await?;

        with_timeout(self.query_timeout, tx.commit()).await?;

        Ok(MatchRecord {
            id: match_id,
            winner_id: winner,
            loser_id: loser,
            played_at,
        })
    }

    async fn delete_matches(&self) -> StoreResult<u64> {
        // match_results rows go with their match via ON DELETE CASCADE
        let result = with_timeout(
            self.query_timeout,
            sqlx::query("DELETE FROM matches").execute(self.pool.as_ref()),
        )
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_players(&self) -> StoreResult<u64> {
        let result = with_timeout(
            self.query_timeout,
            sqlx::query("DELETE FROM players").execute(self.pool.as_ref()),
        )
        .await?;

        Ok(result.rows_affected())
    }

    async fn count_players(&self) -> StoreResult<u64> {
        let count: i64 = with_timeout(
            self.query_timeout,
            sqlx::query_scalar("SELECT COUNT(*) FROM players").fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(count.max(0) as u64)
    }
}
