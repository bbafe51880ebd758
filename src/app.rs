//! Frame harness
//!
//! [`Pendulum`] owns the simulation state and settings and runs one frame at
//! a time against a pair of surfaces: the pendulum surface (cleared and
//! redrawn each frame) and the trace surface (only ever added to). The host
//! owns scheduling and calls [`Pendulum::frame`] from its animation callback.

use glam::DVec2;

use crate::format_speed;
use crate::renderer::{Surface, draw_pendulum};
use crate::settings::Settings;
use crate::sim::{ClearRequest, Command, SimState, apply_command, tick};

/// Pointer cursor over the pendulum surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Paused: clicks place points
    Crosshair,
    Default,
}

impl Cursor {
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Crosshair => "crosshair",
            Cursor::Default => "default",
        }
    }
}

/// What the host UI should show after a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    /// Speed multiplier, rounded to two decimals
    pub speed_label: String,
    pub pendulum_visible: bool,
    pub trace_visible: bool,
    pub cursor: Cursor,
}

/// The pendulum toy: state, settings and per-frame driver
pub struct Pendulum {
    pub state: SimState,
    settings: Settings,
}

impl Pendulum {
    /// Create a paused, empty pendulum anchored at the middle of the viewport
    pub fn new(viewport_width: f64, viewport_height: f64, settings: Settings) -> Self {
        let center = DVec2::new(viewport_width / 2.0, viewport_height / 2.0);
        Self {
            state: SimState::new(center, &settings),
            settings,
        }
    }

    /// Pointer pressed at (x, y). Adds a joint while paused; returns whether it did.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let added = self.state.add_point(DVec2::new(x, y));
        if added {
            log::debug!("Point {} at ({:.0}, {:.0})", self.state.points.len(), x, y);
        }
        added
    }

    /// Key pressed. Auto-repeat and unbound keys are ignored.
    pub fn key_down<P, T>(
        &mut self,
        code: &str,
        repeat: bool,
        pendulum: &mut P,
        trace: &mut T,
    ) -> Option<Command>
    where
        P: Surface + ?Sized,
        T: Surface + ?Sized,
    {
        if repeat {
            return None;
        }
        let cmd = self.settings.keys.command_for(code)?;
        let clear = apply_command(&mut self.state, cmd);
        Self::apply_clear(clear, pendulum, trace);
        Some(cmd)
    }

    fn apply_clear<P, T>(clear: ClearRequest, pendulum: &mut P, trace: &mut T)
    where
        P: Surface + ?Sized,
        T: Surface + ?Sized,
    {
        if clear.primary {
            pendulum.clear();
        }
        if clear.trace {
            trace.clear();
        }
    }

    /// Current UI view of the state
    pub fn view(&self) -> FrameView {
        let flags = &self.state.flags;
        FrameView {
            speed_label: format_speed(flags.speed_multiplier),
            pendulum_visible: !flags.hide_pendulum,
            trace_visible: !flags.hide_line,
            cursor: if flags.active {
                Cursor::Default
            } else {
                Cursor::Crosshair
            },
        }
    }

    /// Run one frame at host timestamp `now_ms`
    pub fn frame<P, T>(&mut self, now_ms: f64, pendulum: &mut P, trace: &mut T) -> FrameView
    where
        P: Surface + ?Sized,
        T: Surface + ?Sized,
    {
        let dt = self.state.clock.advance(now_ms);

        if self.state.flags.refresh {
            pendulum.clear();
        }

        let view = self.view();
        pendulum.set_visible(view.pendulum_visible);
        trace.set_visible(view.trace_visible);

        // Drawn at the positions from before this frame's rotation
        draw_pendulum(pendulum, &self.state, self.settings.point_radius);

        if let Some(seg) = tick(&mut self.state, dt).trace {
            trace.stroke_line(seg.from, seg.to);
        }

        view
    }
}
