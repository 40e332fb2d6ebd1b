//! Spin and wheel DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use super::participant_dto::ParticipantDto;
use crate::domain::wheel::Segment;
use crate::service::raffle_service::StartedSpin;

/// Response body for `POST /spin`: the fixed plan clients animate against.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpinResponse {
    /// Spin identifier for correlating lifecycle events.
    pub spin_id: String,
    /// Number of segments the spin ran over.
    pub segment_count: usize,
    /// Winning index, fixed before the animation starts.
    pub winner_index: usize,
    /// Participant the winning index resolves to.
    pub winner: ParticipantDto,
    /// Wheel rotation at spin start, in radians.
    pub start_rotation: f64,
    /// Total rotation applied over the animation, in radians.
    pub delta: f64,
    /// Animation duration in milliseconds.
    pub duration_ms: u64,
}

impl From<StartedSpin> for SpinResponse {
    fn from(started: StartedSpin) -> Self {
        Self {
            spin_id: started.plan.spin_id.to_string(),
            segment_count: started.plan.segment_count,
            winner_index: started.plan.winner_index,
            winner: started.winner.into(),
            start_rotation: started.plan.start_rotation,
            delta: started.plan.delta,
            duration_ms: started.plan.duration.as_millis() as u64,
        }
    }
}

/// Response body for `POST /spin/cancel`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CancelSpinResponse {
    /// Whether an in-flight spin was actually cancelled.
    pub cancelled: bool,
}

/// Response body for `GET /wheel`: everything a client needs to draw it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WheelResponse {
    /// Whether a spin is in flight.
    pub spinning: bool,
    /// Wheel rotation in radians. At rest this is the residual rotation in
    /// `[0, 2π)`; mid-spin it is the live trajectory sample.
    pub rotation: f64,
    /// Segments in participant order, with display colors.
    pub segments: Vec<Segment>,
}
