//! Pendulum scene drawing

use super::Surface;
use crate::sim::SimState;

/// Draw the chain: one line per segment (anchor first), plus point markers
/// on every joint and the anchor when `draw_circle` is on
pub fn draw_pendulum<S: Surface + ?Sized>(surface: &mut S, state: &SimState, point_radius: f64) {
    let draw_circle = state.flags.draw_circle;

    for (pivot, point) in state.segments() {
        surface.stroke_line(pivot, point);
        if draw_circle {
            surface.fill_circle(point, point_radius);
        }
    }

    if draw_circle {
        surface.fill_circle(state.center, point_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawOp, RecordingSurface};
    use glam::DVec2;

    #[test]
    fn test_draw_order() {
        let mut state = SimState::with_center(DVec2::new(100.0, 100.0));
        state.add_point(DVec2::new(150.0, 100.0));
        state.add_point(DVec2::new(150.0, 160.0));

        let mut surface = RecordingSurface::new();
        draw_pendulum(&mut surface, &state, 4.0);

        assert_eq!(
            surface.ops,
            vec![
                DrawOp::Line { from: DVec2::new(100.0, 100.0), to: DVec2::new(150.0, 100.0) },
                DrawOp::Circle { center: DVec2::new(150.0, 100.0), radius: 4.0 },
                DrawOp::Line { from: DVec2::new(150.0, 100.0), to: DVec2::new(150.0, 160.0) },
                DrawOp::Circle { center: DVec2::new(150.0, 160.0), radius: 4.0 },
                DrawOp::Circle { center: DVec2::new(100.0, 100.0), radius: 4.0 },
            ]
        );
    }

    #[test]
    fn test_markers_off() {
        let mut state = SimState::with_center(DVec2::ZERO);
        state.add_point(DVec2::new(10.0, 0.0));
        state.flags.draw_circle = false;

        let mut surface = RecordingSurface::new();
        draw_pendulum(&mut surface, &state, 4.0);
        assert_eq!(surface.line_count(), 1);
        assert_eq!(surface.circle_count(), 0);
    }

    #[test]
    fn test_empty_chain_draws_anchor_only() {
        let state = SimState::with_center(DVec2::new(5.0, 5.0));
        let mut surface = RecordingSurface::new();
        draw_pendulum(&mut surface, &state, 3.0);
        assert_eq!(
            surface.ops,
            vec![DrawOp::Circle { center: DVec2::new(5.0, 5.0), radius: 3.0 }]
        );
    }
}
