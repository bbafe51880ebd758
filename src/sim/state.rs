//! Simulation state
//!
//! Everything the frame loop and the input handlers share lives here.

use glam::DVec2;
use serde::Serialize;

use crate::consts::*;
use crate::settings::Settings;

/// Clamp a frame delta (seconds) so slow frames or a suspended tab can't
/// produce a large jump
#[inline]
pub fn clamp_dt(dt: f64) -> f64 {
    dt.clamp(0.0, MAX_FRAME_DT)
}

/// User-controlled flags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimFlags {
    /// Running (true) or paused for editing (false)
    pub active: bool,
    /// Clear the pendulum surface every frame
    pub refresh: bool,
    pub hide_pendulum: bool,
    pub hide_line: bool,
    /// Draw point markers
    pub draw_circle: bool,
    /// Always within [SPEED_MIN, SPEED_MAX]
    pub speed_multiplier: f64,
}

impl SimFlags {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            active: false,
            refresh: settings.refresh,
            hide_pendulum: settings.hide_pendulum,
            hide_line: settings.hide_line,
            draw_circle: settings.draw_circle,
            speed_multiplier: settings.speed_multiplier.clamp(SPEED_MIN, SPEED_MAX),
        }
    }

    /// Adjust speed by `delta`, keeping it in range
    pub fn nudge_speed(&mut self, delta: f64) {
        self.speed_multiplier = (self.speed_multiplier + delta).clamp(SPEED_MIN, SPEED_MAX);
    }
}

impl Default for SimFlags {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Simulation clock
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Clock {
    /// Accumulated phase (radians): active time times speed
    pub tick: f64,
    /// Last clamped frame delta (seconds)
    pub dt: f64,
    /// Host timestamp of the previous frame (ms)
    #[serde(skip)]
    last_time: Option<f64>,
}

impl Clock {
    /// Record a frame timestamp (ms) and return the clamped delta in seconds.
    /// The first frame has nothing to measure against and gets the maximum.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_time {
            Some(prev) => clamp_dt((now_ms - prev) / 1000.0),
            None => MAX_FRAME_DT,
        };
        self.last_time = Some(now_ms);
        self.dt = dt;
        dt
    }

    /// Wrap a positive tick into [-2π, 0) keeping its position in the cycle
    pub fn wrap_tick(&mut self) {
        use std::f64::consts::TAU;
        if self.tick > 0.0 {
            self.tick = self.tick % TAU - TAU;
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct SimState {
    /// Fixed anchor (viewport midpoint)
    pub center: DVec2,
    /// Pendulum chain; index 0 hangs off the center
    pub points: Vec<DVec2>,
    /// Where the last chain point was on the previous traced frame
    pub last_point_pos: Option<DVec2>,
    pub flags: SimFlags,
    pub clock: Clock,
}

impl SimState {
    pub fn new(center: DVec2, settings: &Settings) -> Self {
        Self {
            center,
            points: Vec::new(),
            last_point_pos: None,
            flags: SimFlags::from_settings(settings),
            clock: Clock::default(),
        }
    }

    /// State anchored at `center` with default settings
    pub fn with_center(center: DVec2) -> Self {
        Self::new(center, &Settings::default())
    }

    /// Append a point to the chain. Ignored (returns false) while running.
    pub fn add_point(&mut self, pos: DVec2) -> bool {
        if self.flags.active {
            return false;
        }
        self.points.push(pos);
        true
    }

    /// Outermost point of the chain
    pub fn last_point(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    /// Pendulum segments as (pivot, point) pairs, anchor first
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        std::iter::once(self.center)
            .chain(self.points.iter().copied())
            .zip(self.points.iter().copied())
    }

    /// Back to an empty, paused chain
    pub fn reset(&mut self) {
        self.points.clear();
        self.last_point_pos = None;
        self.clock.tick = 0.0;
        self.flags.active = false;
    }
}
