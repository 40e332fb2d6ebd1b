//! Spin lifecycle handlers: start, cancel, and the wheel projection.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CancelSpinResponse, SpinResponse, WheelResponse};
use crate::app_state::AppState;
use crate::domain::wheel::segments_for;
use crate::error::{ErrorResponse, RaffleError};

/// `POST /spin` — Plan and start a spin.
///
/// The winner is fixed before the animation starts; the response carries the
/// exact trajectory for clients to animate. After the configured duration
/// the service resolves the wheel and commits the winner, emitting
/// `spin_finished` and `winner_saved` events on the WebSocket.
///
/// # Errors
///
/// Returns [`RaffleError`] on an empty pool, a spin already in flight, or
/// storage failure.
#[utoipa::path(
    post,
    path = "/spin",
    tag = "Spin",
    summary = "Start a spin",
    description = "Plans a spin over the current checked-in pool and starts the server-side animation clock. One spin at a time; the pool is frozen until the spin resolves.",
    responses(
        (status = 200, description = "Spin started", body = SpinResponse),
        (status = 409, description = "A spin is already in flight", body = ErrorResponse),
        (status = 422, description = "No participants on the wheel", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn start_spin(State(state): State<AppState>) -> Result<impl IntoResponse, RaffleError> {
    let started = state.raffle_service.start_spin().await?;
    Ok(Json(SpinResponse::from(started)))
}

/// `POST /spin/cancel` — Cancel the in-flight spin.
///
/// No winner is resolved and no commit is attempted; the wheel returns to
/// its pre-spin rotation.
#[utoipa::path(
    post,
    path = "/spin/cancel",
    tag = "Spin",
    summary = "Cancel the in-flight spin",
    description = "Aborts the animation clock before resolution. A no-op when nothing is spinning.",
    responses(
        (status = 200, description = "Cancellation outcome", body = CancelSpinResponse),
    )
)]
pub async fn cancel_spin(State(state): State<AppState>) -> impl IntoResponse {
    let cancelled = state.raffle_service.cancel_spin().await;
    Json(CancelSpinResponse { cancelled })
}

/// `GET /wheel` — Current wheel projection.
///
/// # Errors
///
/// Returns [`RaffleError`] on storage failure.
#[utoipa::path(
    get,
    path = "/wheel",
    tag = "Spin",
    summary = "Wheel projection",
    description = "Returns the spin flag, the current rotation (sampled live mid-spin), and the segment sequence (labels and colors) index-aligned with the checked-in pool.",
    responses(
        (status = 200, description = "Wheel state", body = WheelResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn wheel(State(state): State<AppState>) -> Result<impl IntoResponse, RaffleError> {
    let participants = state.raffle_service.participants().await?;
    let (spinning, rotation) = state.raffle_service.wheel_state().await;

    let labels: Vec<&str> = participants
        .iter()
        .map(|p| p.full_name.as_str())
        .collect();

    Ok(Json(WheelResponse {
        spinning,
        rotation,
        segments: segments_for(&labels),
    }))
}

/// Spin routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/spin", post(start_spin))
        .route("/spin/cancel", post(cancel_spin))
        .route("/wheel", get(wheel))
}
