//! Keyboard commands
//!
//! Key codes are resolved to a [`Command`] through the configured
//! [`KeyBindings`](crate::settings::KeyBindings); [`apply_command`] then
//! mutates the state and reports which surfaces the host must wipe.

use super::state::SimState;
use crate::consts::SPEED_STEP;

/// A keyboard-triggered action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start/pause the simulation
    ToggleRun,
    /// Empty the chain and wipe both surfaces
    Reset,
    /// Wipe the pendulum surface only
    ClearPrimary,
    ToggleHidePendulum,
    ToggleHideLine,
    ToggleRefresh,
    ToggleDrawCircle,
    SpeedUp,
    SpeedDown,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::ToggleRun,
        Command::Reset,
        Command::ClearPrimary,
        Command::ToggleHidePendulum,
        Command::ToggleHideLine,
        Command::ToggleRefresh,
        Command::ToggleDrawCircle,
        Command::SpeedUp,
        Command::SpeedDown,
    ];
}

/// Surfaces a command wants cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearRequest {
    pub primary: bool,
    pub trace: bool,
}

impl ClearRequest {
    pub const NONE: Self = Self { primary: false, trace: false };
    pub const PRIMARY: Self = Self { primary: true, trace: false };
    pub const BOTH: Self = Self { primary: true, trace: true };
}

/// Apply a command to the state
pub fn apply_command(state: &mut SimState, cmd: Command) -> ClearRequest {
    let flags = &mut state.flags;
    match cmd {
        Command::ToggleRun => {
            flags.active = !flags.active;
            state.clock.wrap_tick();
            log::info!(
                "{} ({} points, tick {:.3})",
                if flags.active { "Running" } else { "Paused" },
                state.points.len(),
                state.clock.tick
            );
        }
        Command::Reset => {
            state.reset();
            log::info!("Reset");
            return ClearRequest::BOTH;
        }
        Command::ClearPrimary => return ClearRequest::PRIMARY,
        Command::ToggleHidePendulum => flags.hide_pendulum = !flags.hide_pendulum,
        Command::ToggleHideLine => flags.hide_line = !flags.hide_line,
        Command::ToggleRefresh => flags.refresh = !flags.refresh,
        Command::ToggleDrawCircle => flags.draw_circle = !flags.draw_circle,
        Command::SpeedUp => {
            flags.nudge_speed(SPEED_STEP);
            log::debug!("Speed {:.2}", flags.speed_multiplier);
        }
        Command::SpeedDown => {
            flags.nudge_speed(-SPEED_STEP);
            log::debug!("Speed {:.2}", flags.speed_multiplier);
        }
    }
    ClearRequest::NONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SPEED_MAX, SPEED_MIN};
    use glam::DVec2;
    use proptest::prelude::*;
    use std::f64::consts::TAU;

    fn state_with_chain() -> SimState {
        let mut state = SimState::with_center(DVec2::new(400.0, 300.0));
        state.add_point(DVec2::new(500.0, 300.0));
        state.add_point(DVec2::new(550.0, 320.0));
        state
    }

    #[test]
    fn test_toggle_run() {
        let mut state = state_with_chain();
        assert_eq!(apply_command(&mut state, Command::ToggleRun), ClearRequest::NONE);
        assert!(state.flags.active);
        apply_command(&mut state, Command::ToggleRun);
        assert!(!state.flags.active);
    }

    #[test]
    fn test_pause_resume_wraps_large_tick() {
        let mut state = state_with_chain();
        state.flags.active = true;
        state.clock.tick = 3.0 * TAU + 0.25;

        apply_command(&mut state, Command::ToggleRun);
        apply_command(&mut state, Command::ToggleRun);

        assert!(state.flags.active);
        assert!(state.clock.tick >= -TAU && state.clock.tick <= 0.0);
        assert!((state.clock.tick - (0.25 - TAU)).abs() < 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut state = state_with_chain();
        state.flags.active = true;
        state.clock.tick = 2.0;
        state.last_point_pos = Some(DVec2::new(1.0, 2.0));

        assert_eq!(apply_command(&mut state, Command::Reset), ClearRequest::BOTH);
        assert!(state.points.is_empty());
        assert_eq!(state.clock.tick, 0.0);
        assert!(!state.flags.active);
        assert_eq!(state.last_point_pos, None);
    }

    #[test]
    fn test_clear_primary_leaves_state() {
        let mut state = state_with_chain();
        let before = state.clone();
        assert_eq!(apply_command(&mut state, Command::ClearPrimary), ClearRequest::PRIMARY);
        assert_eq!(state.points, before.points);
        assert_eq!(state.flags, before.flags);
    }

    #[test]
    fn test_visibility_toggles() {
        let mut state = state_with_chain();
        let before = state.flags.clone();
        for cmd in [
            Command::ToggleHidePendulum,
            Command::ToggleHideLine,
            Command::ToggleRefresh,
            Command::ToggleDrawCircle,
        ] {
            apply_command(&mut state, cmd);
        }
        assert_eq!(state.flags.hide_pendulum, !before.hide_pendulum);
        assert_eq!(state.flags.hide_line, !before.hide_line);
        assert_eq!(state.flags.refresh, !before.refresh);
        assert_eq!(state.flags.draw_circle, !before.draw_circle);
        assert_eq!(state.flags.active, before.active);
    }

    #[test]
    fn test_speed_steps() {
        let mut state = state_with_chain();
        apply_command(&mut state, Command::SpeedUp);
        assert!((state.flags.speed_multiplier - 1.1).abs() < 1e-9);
        apply_command(&mut state, Command::SpeedDown);
        apply_command(&mut state, Command::SpeedDown);
        assert!((state.flags.speed_multiplier - 0.9).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn speed_stays_in_range(ups in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut state = SimState::with_center(DVec2::ZERO);
            for up in ups {
                let cmd = if up { Command::SpeedUp } else { Command::SpeedDown };
                apply_command(&mut state, cmd);
                prop_assert!(state.flags.speed_multiplier >= SPEED_MIN);
                prop_assert!(state.flags.speed_multiplier <= SPEED_MAX);
            }
        }

        #[test]
        fn resume_tick_is_bounded(tick in TAU..1.0e6_f64) {
            let mut state = SimState::with_center(DVec2::ZERO);
            state.flags.active = true;
            state.clock.tick = tick;
            apply_command(&mut state, Command::ToggleRun);
            apply_command(&mut state, Command::ToggleRun);
            prop_assert!(state.clock.tick >= -TAU && state.clock.tick <= 0.0);
        }
    }
}
