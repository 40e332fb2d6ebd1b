//! Domain events for the spin lifecycle and winner persistence.
//!
//! Every state change emits a [`RaffleEvent`] through the [`super::EventBus`].
//! Events are broadcast to WebSocket subscribers so display clients can
//! mirror the wheel without polling.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::SpinId;
use crate::persistence::models::WinnerRow;

/// Domain event emitted at every raffle state transition.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum RaffleEvent {
    /// Emitted when a spin is planned and its animation clock starts.
    SpinStarted {
        /// Spin identifier.
        spin_id: SpinId,
        /// Number of segments on the wheel.
        segment_count: usize,
        /// Winning index, fixed before the animation starts.
        winner_index: usize,
        /// Wheel rotation when the spin started, in radians.
        start_rotation: f64,
        /// Total rotation applied over the animation, in radians.
        delta: f64,
        /// Animation duration in milliseconds.
        duration_ms: u64,
        /// Start timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when the wheel stops and the winner index is resolved.
    SpinFinished {
        /// Spin identifier.
        spin_id: SpinId,
        /// Resolved winner index.
        winner_index: usize,
        /// Residual rotation after the stop, normalized into `[0, 2π)`.
        rotation: f64,
        /// Stop timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when an in-flight spin is cancelled before resolution.
    SpinCancelled {
        /// Spin identifier.
        spin_id: SpinId,
        /// Cancellation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a spin resolved but the winner could not be committed.
    SpinFailed {
        /// Spin identifier.
        spin_id: SpinId,
        /// Human-readable failure reason.
        reason: String,
        /// Failure timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after the commit transaction succeeds.
    WinnerSaved {
        /// The committed winner row.
        winner: WinnerRow,
        /// Commit timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl RaffleEvent {
    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::SpinStarted { .. } => "spin_started",
            Self::SpinFinished { .. } => "spin_finished",
            Self::SpinCancelled { .. } => "spin_cancelled",
            Self::SpinFailed { .. } => "spin_failed",
            Self::WinnerSaved { .. } => "winner_saved",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn spin_started_event_type() {
        let event = RaffleEvent::SpinStarted {
            spin_id: SpinId::new(),
            segment_count: 8,
            winner_index: 3,
            start_rotation: 0.0,
            delta: 40.0,
            duration_ms: 8_000,
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type_str(), "spin_started");
    }

    #[test]
    fn winner_saved_serializes_with_tag() {
        let event = RaffleEvent::WinnerSaved {
            winner: WinnerRow {
                id: 1,
                participant_id: 2,
                code: "B2".to_string(),
                full_name: "Bob".to_string(),
                prize_name: "Prize".to_string(),
                won_at: Utc::now(),
                phone: None,
            },
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event);
        assert!(json.is_ok());
        let json_str = json.unwrap_or_default();
        assert!(json_str.contains("winner_saved"));
        assert!(json_str.contains("\"Bob\""));
    }

    #[test]
    fn spin_failed_carries_reason() {
        let event = RaffleEvent::SpinFailed {
            spin_id: SpinId::new(),
            reason: "persistence error".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert!(json.contains("spin_failed"));
        assert!(json.contains("persistence error"));
    }
}
