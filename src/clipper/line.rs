//! Parametric (slab) line clipping against the view volume.
//!
//! The segment `p1 + t * (p2 - p1)`, `t` in `[0, 1]`, is narrowed one plane
//! at a time. Each plane gives a linear inequality `num <= t * denom` (or the
//! reverse) in homogeneous space, which either raises `t_min`, lowers
//! `t_max`, or proves the segment empty.
//!
//! Algorithm from Foley, van Dam et al., "Computer Graphics: Principles and
//! Practice".

use super::outcode::ClipPlane;
use crate::math::Vec4;
use crate::vertex::Vertex;

/// Narrow `[t_min, t_max]` by one half-space. Returns `false` when the
/// interval becomes empty.
#[inline]
fn clip_boundary(denom: f32, num: f32, t_min: &mut f32, t_max: &mut f32) -> bool {
    if denom > 0.0 {
        let t = num / denom;
        if t > *t_max {
            return false;
        }
        if t > *t_min {
            *t_min = t;
        }
    } else if denom < 0.0 {
        let t = num / denom;
        if t < *t_min {
            return false;
        }
        if t < *t_max {
            *t_max = t;
        }
    } else if num > 0.0 {
        // Parallel to the plane and entirely on the outside.
        return false;
    }
    true
}

/// Run the six half-space reductions over `a -> b`.
pub fn clip_interval(a: Vec4, b: Vec4) -> Option<(f32, f32)> {
    let d = b - a;
    let mut t_min = 0.0;
    let mut t_max = 1.0;

    for plane in ClipPlane::ALL {
        let axis = plane.axis();
        let sign = plane.sign();
        let denom = -sign * d.axis(axis) + d.w;
        let num = sign * a.axis(axis) - a.w;
        if !clip_boundary(denom, num, &mut t_min, &mut t_max) {
            return None;
        }
    }

    Some((t_min, t_max))
}

/// Clip a line segment, returning the visible parameter interval.
///
/// Two inside endpoints are accepted as `(0, 1)` without any arithmetic;
/// endpoints sharing an outside plane are rejected without any arithmetic.
pub fn clip_line(p1: &Vertex, p2: &Vertex) -> Option<(f32, f32)> {
    let (cc1, cc2) = (p1.clip_code, p2.clip_code);
    if (cc1 | cc2).is_empty() {
        return Some((0.0, 1.0));
    }
    if !(cc1 & cc2).is_empty() {
        return None;
    }
    clip_interval(p1.clip_pos, p2.clip_pos)
}
