//! Spin engine: wheel geometry, easing, spin planning, and the spin
//! state machine.
//!
//! The engine is deliberately free of clocks and rendering. A spin is
//! *planned* up front: the winner index is drawn uniformly first, then the
//! exact rotation delta is computed so that the winning segment stops under
//! the pointer (index-first selection). Animation is a pure sampling
//! function over the plan; whoever owns a clock calls [`Wheel::rotation_at`]
//! per frame and [`Wheel::finish`] once the duration has elapsed.
//!
//! Angle conventions: segment 0 begins at angle 0 in the unrotated wheel,
//! segments are laid out clockwise by increasing index, and the pointer is
//! fixed at the top of the wheel ([`POINTER_ANGLE`]).

use std::f64::consts::{PI, TAU};
use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use super::SpinId;
use crate::error::RaffleError;

/// Fixed pointer position: top of the wheel, `3π/2` radians.
pub const POINTER_ANGLE: f64 = 3.0 * PI / 2.0;

/// Fraction of a segment kept clear of both edges when choosing where the
/// pointer lands inside the winning segment. Keeps float rounding at a
/// boundary from ever flipping the visual segment; does not affect which
/// index wins.
const SEGMENT_EDGE_MARGIN: f64 = 0.05;

/// Segment fill colors, applied `palette[i % 12]` by segment index.
const WHEEL_PALETTE: [&str; 12] = [
    "#EF4444", "#10B981", "#3B82F6", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
    "#06B6D4", "#84CC16", "#6366F1", "#D946EF",
];

/// One wheel sector: a display-only projection of one participant.
///
/// Index-aligned with the checked-in participant sequence for the duration
/// of one spin cycle.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct Segment {
    /// Text rendered on the sector.
    pub label: String,
    /// Sector fill color (hex).
    pub color: &'static str,
}

/// Builds the segment sequence for the given participant labels.
#[must_use]
pub fn segments_for<S: AsRef<str>>(labels: &[S]) -> Vec<Segment> {
    labels
        .iter()
        .zip(WHEEL_PALETTE.iter().copied().cycle())
        .map(|(label, color)| Segment {
            label: label.as_ref().to_string(),
            color,
        })
        .collect()
}

/// Spin policy values (configuration, not logic).
#[derive(Debug, Clone, Copy)]
pub struct SpinParams {
    /// Minimum number of full turns per spin (inclusive).
    pub min_turns: u32,
    /// Maximum number of full turns per spin (exclusive).
    pub max_turns: u32,
    /// Animation duration.
    pub duration: Duration,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            min_turns: 6,
            max_turns: 10,
            duration: Duration::from_millis(8_000),
        }
    }
}

/// A fully planned spin: outcome and trajectory, fixed before any animation.
#[derive(Debug, Clone, Copy)]
pub struct SpinPlan {
    /// Identifier correlating this spin across response, events, and logs.
    pub spin_id: SpinId,
    /// Number of segments on the wheel when the spin was planned.
    pub segment_count: usize,
    /// Winning index, drawn uniformly from `[0, segment_count)`.
    pub winner_index: usize,
    /// Wheel rotation when the spin started, in radians.
    pub start_rotation: f64,
    /// Total rotation applied over the animation, in radians.
    pub delta: f64,
    /// Animation duration.
    pub duration: Duration,
}

impl SpinPlan {
    /// Absolute rotation once the wheel has stopped.
    #[must_use]
    pub fn final_rotation(&self) -> f64 {
        self.start_rotation + self.delta
    }

    /// Samples the trajectory at `elapsed` since spin start.
    #[must_use]
    pub fn rotation_at(&self, elapsed: Duration) -> f64 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        self.start_rotation + self.delta * ease_out_quart(progress)
    }
}

/// Quartic ease-out: `1 - (1-t)^4` for `t ∈ [0, 1]`.
///
/// Continuous and monotonic; starts at 0 progress and decelerates smoothly
/// to exactly 1 with no overshoot. Input is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Derives the winning index from a stopped rotation angle.
///
/// Normalizes `rotation` into `[0, 2π)`, measures the angle from the
/// pointer back to the rotated segment layout, and floors into a segment.
/// Returns `None` when the wheel has no segments.
///
/// Tie-break at an exact segment boundary: the segment whose leading edge
/// sits on the boundary wins (floor semantics), so the mapping is total and
/// deterministic.
#[must_use]
pub fn index_under_pointer(rotation: f64, segment_count: usize) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }
    let angle_per_segment = TAU / segment_count as f64;
    let normalized = rotation.rem_euclid(TAU);
    let relative = (POINTER_ANGLE - normalized).rem_euclid(TAU);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (relative / angle_per_segment).floor() as usize % segment_count;
    Some(index)
}

/// Wheel spin state.
#[derive(Debug, Clone, Copy)]
enum WheelState {
    /// No spin in flight; a new spin may be requested.
    Idle,
    /// A spin is in flight.
    Spinning(SpinPlan),
}

/// The wheel: residual rotation plus an explicit `{Idle, Spinning}` state.
///
/// One wheel per raffle session; at most one spin in flight. All transitions
/// are gated by guard checks ([`Wheel::can_spin`]) rather than ambient flags.
#[derive(Debug)]
pub struct Wheel {
    rotation: f64,
    state: WheelState,
}

impl Wheel {
    /// Creates a wheel at rest with zero rotation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rotation: 0.0,
            state: WheelState::Idle,
        }
    }

    /// Current residual rotation in radians, always within `[0, 2π)`.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns `true` while a spin is in flight.
    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        matches!(self.state, WheelState::Spinning(_))
    }

    /// Guard: `true` when a new spin may be requested.
    #[must_use]
    pub const fn can_spin(&self) -> bool {
        matches!(self.state, WheelState::Idle)
    }

    /// Returns the in-flight plan, if any.
    #[must_use]
    pub const fn current_plan(&self) -> Option<&SpinPlan> {
        match &self.state {
            WheelState::Spinning(plan) => Some(plan),
            WheelState::Idle => None,
        }
    }

    /// Plans a spin and transitions to `Spinning`.
    ///
    /// Index-first selection: the winner is drawn uniformly, then the delta
    /// is computed so the winning segment stops under the pointer after at
    /// least `min_turns` full turns. The pointer lands a safe margin away
    /// from both segment edges.
    ///
    /// # Errors
    ///
    /// - [`RaffleError::EmptyWheel`] when `segment_count` is zero.
    /// - [`RaffleError::SpinInProgress`] when a spin is already in flight.
    /// - [`RaffleError::InvalidRequest`] when the turn bounds are inverted.
    pub fn plan_spin<R: Rng + ?Sized>(
        &mut self,
        segment_count: usize,
        params: &SpinParams,
        rng: &mut R,
    ) -> Result<SpinPlan, RaffleError> {
        if !self.can_spin() {
            return Err(RaffleError::SpinInProgress);
        }
        if segment_count == 0 {
            return Err(RaffleError::EmptyWheel);
        }
        if params.min_turns >= params.max_turns {
            return Err(RaffleError::InvalidRequest(format!(
                "spin turn bounds inverted: {}..{}",
                params.min_turns, params.max_turns
            )));
        }

        let winner_index = rng.random_range(0..segment_count);
        let turns = rng.random_range(params.min_turns..params.max_turns);
        let offset = rng.random_range(SEGMENT_EDGE_MARGIN..(1.0 - SEGMENT_EDGE_MARGIN));

        let angle_per_segment = TAU / segment_count as f64;
        // Normalized rotation that puts (winner_index + offset) segments
        // before the pointer.
        let target = (POINTER_ANGLE - (winner_index as f64 + offset) * angle_per_segment)
            .rem_euclid(TAU);
        let delta = f64::from(turns) * TAU + (target - self.rotation).rem_euclid(TAU);

        let plan = SpinPlan {
            spin_id: SpinId::new(),
            segment_count,
            winner_index,
            start_rotation: self.rotation,
            delta,
            duration: params.duration,
        };
        self.state = WheelState::Spinning(plan);
        Ok(plan)
    }

    /// Samples the rendered rotation at `elapsed` since spin start.
    ///
    /// Returns the residual rotation when no spin is in flight.
    #[must_use]
    pub fn rotation_at(&self, elapsed: Duration) -> f64 {
        match &self.state {
            WheelState::Spinning(plan) => plan.rotation_at(elapsed),
            WheelState::Idle => self.rotation,
        }
    }

    /// Completes the in-flight spin: normalizes the residual rotation into
    /// `[0, 2π)`, returns to `Idle`, and emits the resolved winner index
    /// exactly once.
    ///
    /// The angle-derived index is recomputed from the stopped rotation as a
    /// consistency check against the planned outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RaffleError::Internal`] when no spin is in flight.
    pub fn finish(&mut self) -> Result<usize, RaffleError> {
        let WheelState::Spinning(plan) = self.state else {
            return Err(RaffleError::Internal(
                "finish called with no spin in flight".to_string(),
            ));
        };
        self.rotation = plan.final_rotation().rem_euclid(TAU);
        self.state = WheelState::Idle;

        let derived = index_under_pointer(self.rotation, plan.segment_count);
        if derived != Some(plan.winner_index) {
            tracing::warn!(
                spin_id = %plan.spin_id,
                planned = plan.winner_index,
                derived = ?derived,
                "angle-derived index disagrees with planned index"
            );
        }
        Ok(plan.winner_index)
    }

    /// Cancels the in-flight spin without resolving a winner.
    ///
    /// The wheel returns to `Idle` at its pre-spin rotation. Returns `true`
    /// if a spin was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            WheelState::Spinning(_) => {
                self.state = WheelState::Idle;
                true
            }
            WheelState::Idle => false,
        }
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params() -> SpinParams {
        SpinParams::default()
    }

    fn spin_once(wheel: &mut Wheel, n: usize, rng: &mut StdRng) -> usize {
        let Ok(_plan) = wheel.plan_spin(n, &params(), rng) else {
            panic!("plan failed");
        };
        let Ok(index) = wheel.finish() else {
            panic!("finish failed");
        };
        index
    }

    #[test]
    fn ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn ease_out_quart_monotonic_and_bounded() {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let t = f64::from(i) / 1000.0;
            let eased = ease_out_quart(t);
            assert!(eased >= prev, "not monotonic at t={t}");
            assert!((0.0..=1.0).contains(&eased), "out of range at t={t}");
            prev = eased;
        }
    }

    #[test]
    fn ease_out_quart_clamps_outside_unit_interval() {
        assert_eq!(ease_out_quart(-0.5), 0.0);
        assert_eq!(ease_out_quart(1.5), 1.0);
    }

    #[test]
    fn index_under_pointer_empty_wheel() {
        assert_eq!(index_under_pointer(1.0, 0), None);
    }

    #[test]
    fn index_under_pointer_known_angles() {
        // Four segments, π/2 each. Unrotated: pointer at 3π/2 sits over
        // segment 3 (leading edge exactly at 3π/2).
        assert_eq!(index_under_pointer(0.0, 4), Some(3));
        // Rotating the wheel by 3π/2 brings segment 0's start under the pointer.
        assert_eq!(index_under_pointer(3.0 * PI / 2.0, 4), Some(0));
        // Rotating by π puts the pointer π/2 into the layout: segment 1.
        assert_eq!(index_under_pointer(PI, 4), Some(1));
    }

    #[test]
    fn index_under_pointer_boundary_tie_break() {
        // Exactly on a boundary the segment whose leading edge sits on the
        // boundary wins. Quarter-turn boundaries are exact in binary
        // floating point, so the tie-break is observable without rounding.
        let aps = TAU / 4.0;
        for k in 0..4 {
            let rotation = (POINTER_ANGLE - k as f64 * aps).rem_euclid(TAU);
            assert_eq!(index_under_pointer(rotation, 4), Some(k));
        }
    }

    #[test]
    fn index_under_pointer_is_pure() {
        for _ in 0..3 {
            assert_eq!(index_under_pointer(1.234, 7), index_under_pointer(1.234, 7));
        }
    }

    #[test]
    fn index_under_pointer_invariant_under_full_turns() {
        assert_eq!(
            index_under_pointer(1.0, 9),
            index_under_pointer(1.0 + 3.0 * TAU, 9)
        );
    }

    #[test]
    fn plan_rejects_empty_wheel() {
        let mut wheel = Wheel::new();
        let mut rng = StdRng::seed_from_u64(1);
        let result = wheel.plan_spin(0, &params(), &mut rng);
        assert!(matches!(result, Err(RaffleError::EmptyWheel)));
        assert!(wheel.can_spin());
    }

    #[test]
    fn plan_rejects_double_spin() {
        let mut wheel = Wheel::new();
        let mut rng = StdRng::seed_from_u64(2);
        let first = wheel.plan_spin(5, &params(), &mut rng);
        assert!(first.is_ok());
        assert!(wheel.is_spinning());

        let second = wheel.plan_spin(5, &params(), &mut rng);
        assert!(matches!(second, Err(RaffleError::SpinInProgress)));
        // State untouched by the rejected request.
        assert!(wheel.is_spinning());
        let Ok(first) = first else {
            panic!("plan failed");
        };
        assert_eq!(
            wheel.current_plan().map(|p| p.spin_id),
            Some(first.spin_id)
        );
    }

    #[test]
    fn plan_rejects_inverted_turn_bounds() {
        let mut wheel = Wheel::new();
        let mut rng = StdRng::seed_from_u64(3);
        let bad = SpinParams {
            min_turns: 10,
            max_turns: 10,
            duration: Duration::from_secs(1),
        };
        let result = wheel.plan_spin(5, &bad, &mut rng);
        assert!(matches!(result, Err(RaffleError::InvalidRequest(_))));
    }

    #[test]
    fn plan_guarantees_minimum_turns() {
        let mut rng = StdRng::seed_from_u64(4);
        for n in 1..=20 {
            let mut wheel = Wheel::new();
            let Ok(plan) = wheel.plan_spin(n, &params(), &mut rng) else {
                panic!("plan failed");
            };
            assert!(plan.delta >= f64::from(params().min_turns) * TAU);
        }
    }

    #[test]
    fn planned_index_lands_under_pointer() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut wheel = Wheel::new();
        for round in 0..500 {
            let n = round % 25 + 1;
            let Ok(plan) = wheel.plan_spin(n, &params(), &mut rng) else {
                panic!("plan failed");
            };
            let Ok(index) = wheel.finish() else {
                panic!("finish failed");
            };
            assert_eq!(index, plan.winner_index);
            assert_eq!(index_under_pointer(wheel.rotation(), n), Some(index));
        }
    }

    #[test]
    fn rotation_normalized_after_every_finish() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut wheel = Wheel::new();
        for _ in 0..50 {
            let _ = spin_once(&mut wheel, 8, &mut rng);
            assert!((0.0..TAU).contains(&wheel.rotation()));
        }
    }

    #[test]
    fn winner_distribution_is_uniform() {
        for &n in &[1usize, 5, 12] {
            let mut rng = StdRng::seed_from_u64(7);
            let mut wheel = Wheel::new();
            let spins = 3_000;
            let mut counts = vec![0u32; n];
            for _ in 0..spins {
                let index = spin_once(&mut wheel, n, &mut rng);
                if let Some(slot) = counts.get_mut(index) {
                    *slot += 1;
                }
            }
            let expected = spins as f64 / n as f64;
            for (index, &count) in counts.iter().enumerate() {
                let ratio = f64::from(count) / expected;
                assert!(
                    (0.6..=1.4).contains(&ratio),
                    "index {index} of {n}: count {count}, expected ~{expected}"
                );
            }
        }
    }

    #[test]
    fn rotation_at_samples_trajectory_endpoints() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut wheel = Wheel::new();
        let Ok(plan) = wheel.plan_spin(6, &params(), &mut rng) else {
            panic!("plan failed");
        };
        assert!((wheel.rotation_at(Duration::ZERO) - plan.start_rotation).abs() < 1e-12);
        let end = wheel.rotation_at(plan.duration);
        assert!((end - plan.final_rotation()).abs() < 1e-9);
        // Past the duration the wheel stays put.
        assert!((wheel.rotation_at(plan.duration * 2) - plan.final_rotation()).abs() < 1e-9);
    }

    #[test]
    fn rotation_at_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut wheel = Wheel::new();
        let Ok(plan) = wheel.plan_spin(6, &params(), &mut rng) else {
            panic!("plan failed");
        };
        let mut prev = wheel.rotation_at(Duration::ZERO);
        for step in 1..=100u32 {
            let elapsed = plan.duration * step / 100;
            let sample = wheel.rotation_at(elapsed);
            assert!(sample >= prev);
            prev = sample;
        }
    }

    #[test]
    fn finish_without_spin_errors() {
        let mut wheel = Wheel::new();
        assert!(matches!(wheel.finish(), Err(RaffleError::Internal(_))));
    }

    #[test]
    fn finish_emits_exactly_once() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut wheel = Wheel::new();
        let _ = spin_once(&mut wheel, 4, &mut rng);
        assert!(wheel.finish().is_err());
    }

    #[test]
    fn cancel_restores_idle_without_resolving() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut wheel = Wheel::new();
        let _ = spin_once(&mut wheel, 4, &mut rng);
        let before = wheel.rotation();

        let Ok(_plan) = wheel.plan_spin(4, &params(), &mut rng) else {
            panic!("plan failed");
        };
        assert!(wheel.cancel());
        assert!(wheel.can_spin());
        assert_eq!(wheel.rotation(), before);
        // Nothing left to cancel or finish.
        assert!(!wheel.cancel());
        assert!(wheel.finish().is_err());
    }

    #[test]
    fn segments_cycle_palette() {
        let labels: Vec<String> = (0..13).map(|i| format!("guest {i}")).collect();
        let segments = segments_for(&labels);
        assert_eq!(segments.len(), 13);
        assert_eq!(
            segments.first().map(|s| s.color),
            segments.get(12).map(|s| s.color)
        );
        assert_eq!(segments.first().map(|s| s.label.as_str()), Some("guest 0"));
    }
}
