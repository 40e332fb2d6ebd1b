//! Participant DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::persistence::models::ParticipantRow;

/// One checked-in participant as returned by `GET /participants`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    /// Store-assigned participant ID.
    pub id: i64,
    /// Unique entry code.
    pub code: String,
    /// Participant full name.
    pub full_name: String,
    /// Phone number, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<ParticipantRow> for ParticipantDto {
    fn from(row: ParticipantRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            full_name: row.full_name,
            phone: row.phone,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_omits_missing_phone() {
        let dto = ParticipantDto {
            id: 1,
            code: "A1".to_string(),
            full_name: "Alice".to_string(),
            phone: None,
        };
        let json = serde_json::to_string(&dto).unwrap_or_default();
        assert!(json.contains("\"fullName\":\"Alice\""));
        assert!(!json.contains("phone"));
    }
}
