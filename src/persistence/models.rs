//! Database models for participants and winners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row from the `participants` table, restricted to the checked-in pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantRow {
    /// Store-assigned row ID.
    pub id: i64,
    /// Unique human-readable entry code.
    pub code: String,
    /// Participant full name.
    pub full_name: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

/// A row from the `winners` table.
///
/// `participant_id` is a historical reference: the participant row it points
/// at is deleted in the same transaction that creates this row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnerRow {
    /// Store-assigned row ID.
    pub id: i64,
    /// ID the winning participant had before deletion.
    pub participant_id: i64,
    /// Entry code carried over from the participant.
    pub code: String,
    /// Full name carried over from the participant.
    pub full_name: String,
    /// Prize label awarded.
    pub prize_name: String,
    /// Store-generated award timestamp.
    pub won_at: DateTime<Utc>,
    /// Phone number resolved by code match, if still available.
    pub phone: Option<String>,
}
