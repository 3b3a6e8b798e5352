//! Attribute interpolation for vertices synthesized on a clip plane.

use super::outcode::ClipPlane;
use super::plane::intersect;
use crate::state::RenderState;
use crate::vertex::Vertex;
use crate::viewport::transform_to_viewport;

/// Fill the attributes of `target` at parameter `t` along `p0 -> p1`.
///
/// `target.clip_pos` must already hold the interpolated position. Under smooth
/// shading RGB is interpolated and the target keeps its own alpha; under flat
/// shading the RGB of `p0` is copied unchanged. Texture coordinates are only
/// interpolated when texturing is enabled. The clip code is recomputed and an
/// inside vertex is projected right away.
pub fn interpolate(state: &RenderState, target: &mut Vertex, p0: &Vertex, p1: &Vertex, t: f32) {
    if state.is_smooth() {
        let alpha = target.color.w;
        target.color = p0.color.lerp(p1.color, t);
        target.color.w = alpha;
    } else {
        target.color.x = p0.color.x;
        target.color.y = p0.color.y;
        target.color.z = p0.color.z;
    }

    if state.texture_2d_enabled {
        target.tex_coord = p0.tex_coord.lerp(p1.tex_coord, t);
    }

    target.reclassify();
    if target.is_inside() {
        transform_to_viewport(state, target);
    }
}

/// Build the vertex where the edge `p0 -> p1` crosses `plane`.
///
/// The new vertex starts as a copy of `p0`, so attributes that are not
/// interpolated (alpha, disabled texture coordinates, edge flag) come from
/// `p0`.
pub fn boundary_vertex(state: &RenderState, plane: ClipPlane, p0: &Vertex, p1: &Vertex) -> Vertex {
    let (clip_pos, t) = intersect(plane, p0.clip_pos, p1.clip_pos);
    let mut v = Vertex { clip_pos, ..*p0 };
    interpolate(state, &mut v, p0, p1, t);
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Vec4};
    use crate::state::ShadeModel;
    use approx::assert_relative_eq;

    fn endpoints() -> (Vertex, Vertex) {
        let a = Vertex::new(
            Vec4::new(-2.0, 0.0, 0.0, 1.0),
            Vec4::new(1.0, 0.0, 0.0, 0.25),
            Vec2::new(0.0, 0.0),
        );
        let b = Vertex::new(
            Vec4::new(2.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 1.0, 0.0, 0.75),
            Vec2::new(1.0, 1.0),
        );
        (a, b)
    }

    #[test]
    fn smooth_shading_interpolates_rgb_and_keeps_alpha() {
        let state = RenderState::default();
        let (a, b) = endpoints();
        let v = boundary_vertex(&state, ClipPlane::XMin, &a, &b);
        assert_relative_eq!(v.color.x, 0.75);
        assert_relative_eq!(v.color.y, 0.25);
        assert_eq!(v.color.w, 0.25);
    }

    #[test]
    fn flat_shading_copies_provoking_color() {
        let state = RenderState {
            shade_model: ShadeModel::Flat,
            ..RenderState::default()
        };
        let (a, b) = endpoints();
        let v = boundary_vertex(&state, ClipPlane::XMin, &a, &b);
        assert_eq!(v.color, a.color);
    }

    #[test]
    fn texture_interpolated_only_when_enabled() {
        let (a, b) = endpoints();
        let off = boundary_vertex(&RenderState::default(), ClipPlane::XMin, &a, &b);
        assert_eq!(off.tex_coord, a.tex_coord);

        let state = RenderState {
            texture_2d_enabled: true,
            ..RenderState::default()
        };
        let on = boundary_vertex(&state, ClipPlane::XMin, &a, &b);
        assert_relative_eq!(on.tex_coord.x, 0.25);
        assert_relative_eq!(on.tex_coord.y, 0.25);
    }

    #[test]
    fn inside_boundary_vertex_is_projected() {
        let state = RenderState::default();
        let (a, b) = endpoints();
        let v = boundary_vertex(&state, ClipPlane::XMin, &a, &b);
        assert!(v.is_inside());
        assert_eq!(v.screen.x, 0);
    }

    #[test]
    fn boundary_vertex_outside_other_planes_is_not_projected() {
        let state = RenderState::default();
        let a = Vertex::new(Vec4::new(-2.0, 3.0, 0.0, 1.0), Vec4::ONE, Vec2::ZERO);
        let b = Vertex::new(Vec4::new(2.0, 3.0, 0.0, 1.0), Vec4::ONE, Vec2::ZERO);
        let v = boundary_vertex(&state, ClipPlane::XMin, &a, &b);
        assert!(!v.is_inside());
        assert_eq!(v.screen, a.screen);
    }
}
