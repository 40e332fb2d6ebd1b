//! Winner DTOs for listing, saving, and the diagnostic dump.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::models::WinnerRow;

/// One winner as returned by `GET /winners`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerDto {
    /// Store-assigned winner ID.
    pub id: i64,
    /// Entry code carried over from the participant.
    pub code: String,
    /// Full name carried over from the participant.
    pub full_name: String,
    /// Prize label awarded.
    pub prize_name: String,
    /// Award timestamp.
    pub won_at: DateTime<Utc>,
    /// Phone number resolved by code match, when still available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<WinnerRow> for WinnerDto {
    fn from(row: WinnerRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            full_name: row.full_name,
            prize_name: row.prize_name,
            won_at: row.won_at,
            phone: row.phone,
        }
    }
}

/// Full winner record embedded in the `POST /save-winner` response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRecordDto {
    /// Store-assigned winner ID.
    pub id: i64,
    /// ID the winning participant had before deletion.
    pub participant_id: i64,
    /// Entry code.
    pub code: String,
    /// Full name.
    pub full_name: String,
    /// Prize label awarded.
    pub prize_name: String,
    /// Award timestamp.
    pub won_at: DateTime<Utc>,
}

impl From<WinnerRow> for WinnerRecordDto {
    fn from(row: WinnerRow) -> Self {
        Self {
            id: row.id,
            participant_id: row.participant_id,
            code: row.code,
            full_name: row.full_name,
            prize_name: row.prize_name,
            won_at: row.won_at,
        }
    }
}

/// Request body for `POST /save-winner`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveWinnerRequest {
    /// ID of the participant to convert into a winner.
    #[serde(default)]
    pub participant_id: i64,
    /// Entry code of the participant.
    #[serde(default)]
    pub code: String,
    /// Full name of the participant.
    #[serde(default)]
    pub full_name: String,
    /// Prize label; a generic default is used when absent.
    #[serde(default)]
    pub prize_name: Option<String>,
}

/// Response body for `POST /save-winner`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveWinnerResponse {
    /// Always `true` on success.
    pub success: bool,
    /// The committed winner record.
    pub winner: WinnerRecordDto,
}

/// Response body for the `GET /test-winners` diagnostic dump.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TestWinnersResponse {
    /// Total number of winner rows.
    pub count: i64,
    /// All winners, newest-first.
    pub winners: Vec<WinnerDto>,
}
