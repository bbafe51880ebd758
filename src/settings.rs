//! Pendulum settings
//!
//! Read-only configuration supplied by the host page (or a JSON file for the
//! headless runner). Nothing here is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::{POINT_RADIUS, SPEED_MAX, SPEED_MIN};
use crate::sim::Command;

/// Physical key codes (`KeyboardEvent.code`) bound to each command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub toggle_run: String,
    pub reset: String,
    pub clear_primary: String,
    pub toggle_hide_pendulum: String,
    pub toggle_hide_line: String,
    pub toggle_refresh: String,
    pub toggle_draw_circle: String,
    pub speed_up: String,
    pub speed_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_run: "Space".into(),
            reset: "KeyR".into(),
            clear_primary: "KeyC".into(),
            toggle_hide_pendulum: "KeyP".into(),
            toggle_hide_line: "KeyL".into(),
            toggle_refresh: "KeyX".into(),
            toggle_draw_circle: "KeyO".into(),
            speed_up: "ArrowRight".into(),
            speed_down: "ArrowLeft".into(),
        }
    }
}

impl KeyBindings {
    /// Look up the command bound to a key code
    pub fn command_for(&self, code: &str) -> Option<Command> {
        Command::ALL
            .iter()
            .copied()
            .find(|&cmd| self.code_for(cmd) == code)
    }

    /// Key code bound to a command
    pub fn code_for(&self, cmd: Command) -> &str {
        match cmd {
            Command::ToggleRun => &self.toggle_run,
            Command::Reset => &self.reset,
            Command::ClearPrimary => &self.clear_primary,
            Command::ToggleHidePendulum => &self.toggle_hide_pendulum,
            Command::ToggleHideLine => &self.toggle_hide_line,
            Command::ToggleRefresh => &self.toggle_refresh,
            Command::ToggleDrawCircle => &self.toggle_draw_circle,
            Command::SpeedUp => &self.speed_up,
            Command::SpeedDown => &self.speed_down,
        }
    }
}

/// Pendulum settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Drawing ===
    /// Marker radius for chain points and the anchor
    pub point_radius: f64,
    /// Stroke style for pendulum segments
    pub stroke_color: String,
    /// Fill style for point markers
    pub fill_color: String,
    /// Stroke style for the trace surface
    pub trace_color: String,
    pub line_width: f64,

    // === Initial flags ===
    /// Clear the pendulum surface every frame
    pub refresh: bool,
    pub draw_circle: bool,
    pub hide_pendulum: bool,
    pub hide_line: bool,
    /// Starting speed multiplier (clamped to the allowed range)
    pub speed_multiplier: f64,

    // === Input ===
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            stroke_color: "white".into(),
            fill_color: "white".into(),
            trace_color: "white".into(),
            line_width: 1.0,

            refresh: true,
            draw_circle: true,
            hide_pendulum: false,
            hide_line: false,
            speed_multiplier: 1.0,

            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        let defaults = Self::default();
        settings.speed_multiplier = settings.speed_multiplier.clamp(SPEED_MIN, SPEED_MAX);
        settings.point_radius = non_negative(settings.point_radius, defaults.point_radius);
        settings.line_width = non_negative(settings.line_width, defaults.line_width);
        Ok(settings)
    }

    /// Element holding the JSON settings block on the host page
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "pendulum-settings";

    /// Load settings from the page's settings block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from an optional JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Lengths must be finite and non-negative; the canvas rejects negative radii
fn non_negative(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.command_for("Space"), Some(Command::ToggleRun));
        assert_eq!(keys.command_for("KeyR"), Some(Command::Reset));
        assert_eq!(keys.command_for("ArrowLeft"), Some(Command::SpeedDown));
        assert_eq!(keys.command_for("KeyZ"), None);
    }

    #[test]
    fn test_every_command_has_distinct_default_key() {
        let keys = KeyBindings::default();
        for cmd in Command::ALL {
            assert_eq!(keys.command_for(keys.code_for(cmd)), Some(cmd));
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "point_radius": 8, "keys": { "toggle_run": "Enter" } }"#)
                .unwrap();
        assert_eq!(settings.point_radius, 8.0);
        assert!(settings.refresh);
        assert_eq!(settings.keys.command_for("Enter"), Some(Command::ToggleRun));
        assert_eq!(settings.keys.command_for("Space"), None);
        assert_eq!(settings.keys.reset, "KeyR");
    }

    #[test]
    fn test_speed_clamped_on_load() {
        let settings = Settings::from_json(r#"{ "speed_multiplier": 12.5 }"#).unwrap();
        assert_eq!(settings.speed_multiplier, SPEED_MAX);
        let settings = Settings::from_json(r#"{ "speed_multiplier": -1 }"#).unwrap();
        assert_eq!(settings.speed_multiplier, SPEED_MIN);
    }

    #[test]
    fn test_lengths_clamped_on_load() {
        let settings =
            Settings::from_json(r#"{ "point_radius": -5, "line_width": -2 }"#).unwrap();
        assert_eq!(settings.point_radius, 0.0);
        assert_eq!(settings.line_width, 0.0);

        let settings = Settings::from_json(r#"{ "point_radius": 7.5, "line_width": 3 }"#).unwrap();
        assert_eq!(settings.point_radius, 7.5);
        assert_eq!(settings.line_width, 3.0);
    }

    #[test]
    fn test_non_finite_lengths_fall_back() {
        assert_eq!(non_negative(f64::NAN, 5.0), 5.0);
        assert_eq!(non_negative(f64::INFINITY, 1.0), 1.0);
        assert_eq!(non_negative(-0.5, 1.0), 0.0);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ point_radius: ").is_err());
        assert!(Settings::from_json(r#"{ "refresh": "yes" }"#).is_err());
    }
}
