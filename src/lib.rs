//! Pendulum Chain - a jointed pendulum that draws its own trace
//!
//! Core modules:
//! - `sim`: Simulation state, input commands, kinematics and the step function
//! - `renderer`: Drawing surfaces and the pendulum scene drawn on them
//! - `app`: Frame harness tying the simulation to a pair of surfaces
//! - `settings`: Read-only configuration (colors, radius, key bindings)
//! - `headless`: Browserless runner used by the native binary

pub mod app;
pub mod headless;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{FrameView, Pendulum};
pub use settings::{KeyBindings, Settings};

use glam::DVec2;

/// Simulation constants
pub mod consts {
    use std::f64::consts::TAU;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Speed multiplier bounds and step per key press
    pub const SPEED_MIN: f64 = 0.0;
    pub const SPEED_MAX: f64 = 3.0;
    pub const SPEED_STEP: f64 = 0.1;

    /// Trace drawing stops once tick passes this. Slightly over one full
    /// revolution; a heuristic cutoff rather than an exact one.
    pub const TRACE_TICK_LIMIT: f64 = TAU * 1.01;

    /// Marker radius for chain points and the anchor
    pub const POINT_RADIUS: f64 = 5.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}

/// Round to two decimal places and format without trailing zeros ("1", "1.1", "0.35")
pub fn format_speed(speed: f64) -> String {
    let rounded = (speed * 100.0).round() / 100.0;
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_polar_round_trip_quadrant() {
        let p = polar_to_cartesian(10.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);

        let (r, theta) = cartesian_to_polar(DVec2::new(-3.0, -4.0));
        assert!((r - 5.0).abs() < 1e-9);
        assert!(theta < -FRAC_PI_2);
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(1.0), "1");
        assert_eq!(format_speed(1.1), "1.1");
        assert_eq!(format_speed(0.1 + 0.2), "0.3");
        assert_eq!(format_speed(2.345_6), "2.35");
        assert_eq!(format_speed(0.0), "0");
    }
}
