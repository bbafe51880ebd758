//! In-memory surface that records draw calls

use glam::DVec2;

use super::Surface;

/// A recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Circle { center: DVec2, radius: f64 },
    Line { from: DVec2, to: DVec2 },
    Clear,
}

/// Surface that keeps every call instead of drawing pixels
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pub visible: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            visible: true,
        }
    }

    /// Ops drawn since the most recent clear
    pub fn since_clear(&self) -> &[DrawOp] {
        match self.ops.iter().rposition(|op| *op == DrawOp::Clear) {
            Some(i) => &self.ops[i + 1..],
            None => &self.ops,
        }
    }

    pub fn line_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
    }

    pub fn circle_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count()
    }

    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Clear)).count()
    }

    /// Drop the recorded history (keeps visibility)
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.ops.push(DrawOp::Circle { center, radius });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.ops.push(DrawOp::Line { from, to });
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since_clear() {
        let mut surface = RecordingSurface::new();
        surface.stroke_line(DVec2::ZERO, DVec2::ONE);
        assert_eq!(surface.since_clear().len(), 1);

        surface.clear();
        surface.fill_circle(DVec2::ONE, 2.0);
        assert_eq!(
            surface.since_clear(),
            &[DrawOp::Circle { center: DVec2::ONE, radius: 2.0 }]
        );
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn test_take_ops_keeps_visibility() {
        let mut surface = RecordingSurface::new();
        surface.set_visible(false);
        surface.clear();
        assert_eq!(surface.take_ops(), vec![DrawOp::Clear]);
        assert!(surface.ops.is_empty());
        assert!(!surface.visible);
    }
}
