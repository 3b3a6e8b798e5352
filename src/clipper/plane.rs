//! Intersection of a clip-space segment with a single view-volume plane.

use super::outcode::ClipPlane;
use crate::math::{Axis, Vec4};

/// Intersect the segment `a -> b` with `plane`.
///
/// Returns the intersection point and the parameter `t` such that the point is
/// `a + t * (b - a)`. Solves `sign * coord = w` along the segment, where
/// `coord` is the plane's governing axis. The two remaining axes and `w` are
/// interpolated with `t`; the governing axis is then set to exactly
/// `sign * w` so the result lies on the plane without floating point drift.
///
/// A segment parallel to the plane in homogeneous space (zero denominator)
/// clips at `a` (`t = 0`).
pub fn intersect(plane: ClipPlane, a: Vec4, b: Vec4) -> (Vec4, f32) {
    let axis = plane.axis();
    let sign = plane.sign();
    let d = b - a;

    let den = -(sign * d.axis(axis)) + d.w;
    let t = if den == 0.0 {
        0.0
    } else {
        (sign * a.axis(axis) - a.w) / den
    };

    let mut c = a;
    for other in [Axis::X, Axis::Y, Axis::Z] {
        if other != axis {
            c.set_axis(other, a.axis(other) + t * d.axis(other));
        }
    }
    c.w = a.w + t * d.w;
    c.set_axis(axis, sign * c.w);

    (c, t)
}
