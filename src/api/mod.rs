//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Routes are mounted at the router root; the paths are part of the UI
//! contract and are not versioned.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    handlers::routes()
}

/// Aggregated OpenAPI document for the REST surface.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::participants::list_participants,
        handlers::winners::list_winners,
        handlers::winners::save_winner,
        handlers::winners::test_winners,
        handlers::spin::start_spin,
        handlers::spin::cancel_spin,
        handlers::spin::wheel,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::ParticipantDto,
        dto::WinnerDto,
        dto::WinnerRecordDto,
        dto::SaveWinnerRequest,
        dto::SaveWinnerResponse,
        dto::TestWinnersResponse,
        dto::SpinResponse,
        dto::CancelSpinResponse,
        dto::WheelResponse,
        crate::domain::wheel::Segment,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "Participants", description = "Checked-in participant pool"),
        (name = "Winners", description = "Winner log and commit protocol"),
        (name = "Spin", description = "Wheel spin lifecycle"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
