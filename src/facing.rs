//! Facing classification and face culling for fully-inside triangles.

use log::trace;

use crate::clipper::Discard;
use crate::state::{CullFace, FrontFace, RenderState};
use crate::vertex::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
}

/// Twice the signed area of a triangle in device space.
///
/// Device y points down, so a triangle that is counter-clockwise in
/// normalized device space comes out negative here.
#[inline]
pub fn signed_area(p0: &ScreenPoint, p1: &ScreenPoint, p2: &ScreenPoint) -> f32 {
    (p1.x - p0.x) as f32 * (p2.y - p0.y) as f32 - (p2.x - p0.x) as f32 * (p1.y - p0.y) as f32
}

/// Facing of a triangle with the given non-zero signed area.
pub fn facing(state: &RenderState, area: f32) -> Facing {
    let ccw = area < 0.0;
    let front = ccw ^ (state.front_face == FrontFace::Cw);
    if front {
        Facing::Front
    } else {
        Facing::Back
    }
}

/// Apply the cull policy. Any cull mode other than front or back culls
/// every triangle.
pub fn survives_culling(state: &RenderState, facing: Facing) -> bool {
    if !state.cull_face_enabled {
        return true;
    }
    match state.cull_face {
        CullFace::Back => facing == Facing::Front,
        CullFace::Front => facing == Facing::Back,
        CullFace::FrontAndBack => false,
    }
}

/// Decide whether and how a fully-inside triangle is drawn.
pub fn classify_triangle(
    state: &RenderState,
    p0: &ScreenPoint,
    p1: &ScreenPoint,
    p2: &ScreenPoint,
) -> Result<Facing, Discard> {
    let area = signed_area(p0, p1, p2);
    if area == 0.0 {
        trace!("degenerate triangle {:?} {:?} {:?}", p0, p1, p2);
        return Err(Discard::Degenerate);
    }

    let facing = facing(state, area);
    if !survives_culling(state, facing) {
        trace!("culled {facing:?} triangle");
        return Err(Discard::Culled);
    }
    Ok(facing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: i32, y: i32) -> ScreenPoint {
        ScreenPoint {
            x,
            y,
            ..ScreenPoint::default()
        }
    }

    /// Counter-clockwise on screen with y up, i.e. clockwise in device space.
    fn ccw() -> [ScreenPoint; 3] {
        [point(0, 10), point(10, 10), point(0, 0)]
    }

    fn cw() -> [ScreenPoint; 3] {
        [point(0, 10), point(0, 0), point(10, 10)]
    }

    fn state(cull: Option<CullFace>) -> RenderState {
        RenderState {
            cull_face_enabled: cull.is_some(),
            cull_face: cull.unwrap_or_default(),
            ..RenderState::default()
        }
    }

    fn run(tri: [ScreenPoint; 3], s: &RenderState) -> Result<Facing, Discard> {
        classify_triangle(s, &tri[0], &tri[1], &tri[2])
    }

    #[test]
    fn zero_area_is_degenerate() {
        let s = RenderState::default();
        let line = [point(0, 0), point(5, 5), point(10, 10)];
        assert_eq!(run(line, &s), Err(Discard::Degenerate));
    }

    #[test]
    fn ccw_is_front_by_default() {
        let s = RenderState::default();
        assert!(signed_area(&ccw()[0], &ccw()[1], &ccw()[2]) < 0.0);
        assert_eq!(run(ccw(), &s), Ok(Facing::Front));
        assert_eq!(run(cw(), &s), Ok(Facing::Back));
    }

    #[test]
    fn cw_front_face_flips_facing() {
        let s = RenderState {
            front_face: FrontFace::Cw,
            ..RenderState::default()
        };
        assert_eq!(run(ccw(), &s), Ok(Facing::Back));
        assert_eq!(run(cw(), &s), Ok(Facing::Front));
    }

    #[test]
    fn culling_matrix() {
        let cases = [
            (None, Ok(Facing::Front), Ok(Facing::Back)),
            (Some(CullFace::Back), Ok(Facing::Front), Err(Discard::Culled)),
            (Some(CullFace::Front), Err(Discard::Culled), Ok(Facing::Back)),
        ];
        for (cull, front, back) in cases {
            let s = state(cull);
            assert_eq!(run(ccw(), &s), front, "{cull:?} front");
            assert_eq!(run(cw(), &s), back, "{cull:?} back");
        }
    }

    #[test]
    fn front_and_back_culls_everything() {
        let s = state(Some(CullFace::FrontAndBack));
        assert_eq!(run(ccw(), &s), Err(Discard::Culled));
        assert_eq!(run(cw(), &s), Err(Discard::Culled));
    }
}
