//! Per-frame simulation step
//!
//! Advances the clock, turns the chain and decides what the trace surface
//! should draw. Pure state in, state out; drawing is left to the caller.

use glam::DVec2;

use super::kinematics::move_points;
use super::state::{SimState, clamp_dt};
use crate::consts::TRACE_TICK_LIMIT;

/// A line the trace surface should stroke this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSegment {
    pub from: DVec2,
    pub to: DVec2,
}

/// Result of one step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutput {
    pub trace: Option<TraceSegment>,
}

/// Advance the simulation by `dt` seconds (clamped). No-op while paused.
pub fn tick(state: &mut SimState, dt: f64) -> TickOutput {
    let dt = clamp_dt(dt);
    state.clock.dt = dt;

    if !state.flags.active {
        return TickOutput::default();
    }

    let angle = state.flags.speed_multiplier * dt;
    state.clock.tick += angle;
    move_points(state.center, &mut state.points, angle);

    let mut output = TickOutput::default();
    if let Some(last) = state.last_point() {
        if state.clock.tick < TRACE_TICK_LIMIT {
            output.trace = state
                .last_point_pos
                .map(|from| TraceSegment { from, to: last });
            state.last_point_pos = Some(last);
        }
    }
    output
}
