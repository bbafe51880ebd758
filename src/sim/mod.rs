//! Simulation module
//!
//! All pendulum logic lives here. No rendering or platform dependencies:
//! - Input handlers mutate `SimState` through `apply_command`/`add_point`
//! - `tick` advances one frame and reports the trace segment to draw

pub mod input;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use input::{ClearRequest, Command, apply_command};
pub use kinematics::{move_points, rotate_about};
pub use state::{Clock, SimFlags, SimState, clamp_dt};
pub use tick::{TickOutput, TraceSegment, tick};
