//! Chain kinematics
//!
//! Every joint turns by the same angle each frame. Turning joint `j` drags
//! everything outboard of it along, so point `i` is rotated once per joint
//! between it and the anchor, itself included.

use glam::DVec2;

use crate::{cartesian_to_polar, polar_to_cartesian};

/// Rotate `point` counter-clockwise about `pivot` by `angle` radians,
/// keeping its distance from the pivot
#[inline]
pub fn rotate_about(pivot: DVec2, point: DVec2, angle: f64) -> DVec2 {
    let (distance, theta) = cartesian_to_polar(point - pivot);
    pivot + polar_to_cartesian(distance, theta + angle)
}

/// Turn every joint of the chain by `angle`. O(n²) in chain length.
///
/// Pivots are read after the inner joints have moved, so each pivot is the
/// already-updated position of the previous point.
pub fn move_points(center: DVec2, points: &mut [DVec2], angle: f64) {
    for j in 0..points.len() {
        let pivot = if j == 0 { center } else { points[j - 1] };
        for point in &mut points[j..] {
            *point = rotate_about(pivot, *point, angle);
        }
    }
}
