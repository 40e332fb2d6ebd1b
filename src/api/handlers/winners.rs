//! Winner handlers: listing, committing, and the diagnostic dump.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    SaveWinnerRequest, SaveWinnerResponse, TestWinnersResponse, WinnerDto,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, RaffleError};

/// `GET /winners` — List all winners, newest-first.
///
/// # Errors
///
/// Returns [`RaffleError`] on storage failure.
#[utoipa::path(
    get,
    path = "/winners",
    tag = "Winners",
    summary = "List winners",
    description = "Returns every recorded winner, newest-first. Phone numbers are resolved by case-insensitive code match against the participants table and may be absent once the winning participant row is deleted.",
    responses(
        (status = 200, description = "Winner list", body = Vec<WinnerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_winners(State(state): State<AppState>) -> Result<impl IntoResponse, RaffleError> {
    let winners = state.raffle_service.winners().await?;
    let data: Vec<WinnerDto> = winners.into_iter().map(Into::into).collect();
    Ok(Json(data))
}

/// `POST /save-winner` — Commit a winner through the transactional protocol.
///
/// Inserts the winner row and deletes the participant row in one atomic
/// transaction; neither mutation is ever visible without the other.
///
/// # Errors
///
/// Returns [`RaffleError`] on validation failure, a missing participant,
/// an in-flight spin, or storage failure.
#[utoipa::path(
    post,
    path = "/save-winner",
    tag = "Winners",
    summary = "Commit a winner",
    description = "Validates the request, then atomically inserts a winner row and removes the participant from the pool. The prize label falls back to a generic default when omitted.",
    request_body = SaveWinnerRequest,
    responses(
        (status = 200, description = "Winner committed", body = SaveWinnerResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 404, description = "Participant no longer exists", body = ErrorResponse),
        (status = 409, description = "A spin is in flight", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn save_winner(
    State(state): State<AppState>,
    Json(request): Json<SaveWinnerRequest>,
) -> Result<impl IntoResponse, RaffleError> {
    let winner = state
        .raffle_service
        .save_winner(
            request.participant_id,
            &request.code,
            &request.full_name,
            request.prize_name.as_deref(),
        )
        .await?;

    Ok(Json(SaveWinnerResponse {
        success: true,
        winner: winner.into(),
    }))
}

/// `GET /test-winners` — Diagnostic dump of the winners table.
///
/// # Errors
///
/// Returns [`RaffleError`] on storage failure.
#[utoipa::path(
    get,
    path = "/test-winners",
    tag = "Winners",
    summary = "Winners diagnostic dump",
    description = "Returns the winner count alongside the full list. Intended for operators verifying the raffle state during an event.",
    responses(
        (status = 200, description = "Count and winner list", body = TestWinnersResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn test_winners(State(state): State<AppState>) -> Result<impl IntoResponse, RaffleError> {
    let count = state.raffle_service.winner_count().await?;
    let winners = state.raffle_service.winners().await?;

    Ok(Json(TestWinnersResponse {
        count,
        winners: winners.into_iter().map(Into::into).collect(),
    }))
}

/// Winner routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/winners", get(list_winners))
        .route("/save-winner", post(save_winner))
        .route("/test-winners", get(test_winners))
}
