//! Rendering module
//!
//! The simulation draws through the [`Surface`] trait: a filled circle and a
//! stroked line are the only primitives. Two backends exist:
//! - `CanvasSurface`: a browser `<canvas>` 2D context (wasm only)
//! - `RecordingSurface`: records draw calls, for tests and the headless runner

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawOp, RecordingSurface};
pub use shapes::draw_pendulum;

use glam::DVec2;

/// Something the pendulum can be drawn on
pub trait Surface {
    /// Fill a full circle centered at `center`
    fn fill_circle(&mut self, center: DVec2, radius: f64);

    /// Stroke a straight line from `from` to `to`
    fn stroke_line(&mut self, from: DVec2, to: DVec2);

    /// Erase every pixel
    fn clear(&mut self);

    /// Show or hide the whole surface
    fn set_visible(&mut self, visible: bool);
}
