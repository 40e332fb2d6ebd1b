//! PostgreSQL implementation of the raffle store.
//!
//! Holds the read queries for both pools and the winner commit protocol:
//! one transaction that inserts the winner row and deletes the participant
//! row, all-or-nothing.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::{ParticipantRow, WinnerRow};
use crate::error::RaffleError;

/// PostgreSQL-backed raffle store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all checked-in participants, oldest-entered-first.
    ///
    /// # Errors
    ///
    /// Returns a [`RaffleError::PersistenceError`] on database failure.
    pub async fn list_participants(&self) -> Result<Vec<ParticipantRow>, RaffleError> {
        let rows = sqlx::query_as::<_, (i64, String, String, Option<String>)>(
            "SELECT id, code, full_name, phone FROM participants \
             WHERE checked_in ORDER BY entered_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RaffleError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, code, full_name, phone)| ParticipantRow {
                id,
                code,
                full_name,
                phone,
            })
            .collect())
    }

    /// Lists all winners, newest-first.
    ///
    /// The phone number is resolved by case-insensitive code match against
    /// the participants table; it comes back `NULL` once the winning
    /// participant row is gone.
    ///
    /// # Errors
    ///
    /// Returns a [`RaffleError::PersistenceError`] on database failure.
    pub async fn list_winners(&self) -> Result<Vec<WinnerRow>, RaffleError> {
        let rows = sqlx::query_as::<
            _,
            (i64, i64, String, String, String, DateTime<Utc>, Option<String>),
        >(
            "SELECT w.id, w.participant_id, w.code, w.full_name, w.prize_name, w.won_at, p.phone \
             FROM winners w \
             LEFT JOIN participants p ON upper(p.code) = upper(w.code) \
             ORDER BY w.won_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RaffleError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(
                |(id, participant_id, code, full_name, prize_name, won_at, phone)| WinnerRow {
                    id,
                    participant_id,
                    code,
                    full_name,
                    prize_name,
                    won_at,
                    phone,
                },
            )
            .collect())
    }

    /// Commits a winner: inserts the winner row and deletes the participant
    /// row inside one transaction.
    ///
    /// The insert runs first; the delete is checked against its affected-row
    /// count. Any failure — including a delete that touches zero rows — rolls
    /// the whole transaction back, so no winner exists without the matching
    /// participant removal and vice versa.
    ///
    /// # Errors
    ///
    /// - [`RaffleError::ParticipantNotFound`] when no participant row matches
    ///   `participant_id` (transaction rolled back).
    /// - [`RaffleError::PersistenceError`] on any database failure.
    pub async fn save_winner(
        &self,
        participant_id: i64,
        code: &str,
        full_name: &str,
        prize_name: &str,
    ) -> Result<WinnerRow, RaffleError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RaffleError::PersistenceError(e.to_string()))?;

        let inserted = sqlx::query_as::<_, (i64, i64, String, String, String, DateTime<Utc>)>(
            "INSERT INTO winners (participant_id, code, full_name, prize_name) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, participant_id, code, full_name, prize_name, won_at",
        )
        .bind(participant_id)
        .bind(code)
        .bind(full_name)
        .bind(prize_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RaffleError::PersistenceError(e.to_string()))?;

        let deleted = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(participant_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RaffleError::PersistenceError(e.to_string()))?;

        if deleted.rows_affected() == 0 {
            // Dropping the transaction rolls the insert back with it.
            return Err(RaffleError::ParticipantNotFound(participant_id));
        }

        tx.commit()
            .await
            .map_err(|e| RaffleError::PersistenceError(e.to_string()))?;

        let (id, winner_participant_id, code, full_name, prize_name, won_at) = inserted;
        Ok(WinnerRow {
            id,
            participant_id: winner_participant_id,
            code,
            full_name,
            prize_name,
            won_at,
            phone: None,
        })
    }

    /// Returns the total number of winner rows.
    ///
    /// # Errors
    ///
    /// Returns a [`RaffleError::PersistenceError`] on database failure.
    pub async fn winner_count(&self) -> Result<i64, RaffleError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM winners")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RaffleError::PersistenceError(e.to_string()))
    }
}
