//! Participant pool handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::ParticipantDto;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, RaffleError};

/// `GET /participants` — List the checked-in pool, oldest-entered-first.
///
/// # Errors
///
/// Returns [`RaffleError`] on storage failure.
#[utoipa::path(
    get,
    path = "/participants",
    tag = "Participants",
    summary = "List checked-in participants",
    description = "Returns every checked-in participant eligible for the wheel, ordered oldest-entered-first. Index positions correspond to wheel segments for the next spin.",
    responses(
        (status = 200, description = "Eligible participants", body = Vec<ParticipantDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_participants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RaffleError> {
    let participants = state.raffle_service.participants().await?;
    let data: Vec<ParticipantDto> = participants.into_iter().map(Into::into).collect();
    Ok(Json(data))
}

/// Participant routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/participants", get(list_participants))
}
