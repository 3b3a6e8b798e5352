//! Recursive triangle clipping.
//!
//! A triangle is clipped against one plane per recursion level, in the fixed
//! order XMIN, XMAX, YMIN, YMAX, ZMIN, ZMAX. Planes none of the vertices
//! violate are skipped. At each level:
//!
//! - one vertex outside: the quad left inside is split into two triangles,
//! - two vertices outside: a single smaller triangle remains.
//!
//! Every level strictly advances the plane index, so recursion depth is at
//! most six and all temporaries live on the stack.

use log::trace;

use super::attributes::boundary_vertex;
use super::outcode::ClipPlane;
use super::Discard;
use crate::state::RenderState;
use crate::vertex::Vertex;

/// Receives the output of [`clip_triangle`].
pub trait TriangleSink {
    /// A triangle whose three vertices are inside the view volume and have
    /// valid screen records.
    fn inside(&mut self, p0: &Vertex, p1: &Vertex, p2: &Vertex);

    /// A (sub-)triangle that was dropped.
    fn discarded(&mut self, _reason: Discard) {}
}

impl<F> TriangleSink for F
where
    F: FnMut(&Vertex, &Vertex, &Vertex),
{
    fn inside(&mut self, p0: &Vertex, p1: &Vertex, p2: &Vertex) {
        self(p0, p1, p2)
    }
}

/// Clip `p0, p1, p2` against the planes from `clip_bit` onwards.
///
/// Edge flags are maintained so that line and point rendering of the output
/// draws the original edges once and never the diagonal that splits a
/// clipped quad. Edges lying on a clip plane are marked visible.
pub fn clip_triangle<S>(
    state: &RenderState,
    p0: &Vertex,
    p1: &Vertex,
    p2: &Vertex,
    clip_bit: usize,
    sink: &mut S,
) where
    S: TriangleSink + ?Sized,
{
    let cc = [p0.clip_code, p1.clip_code, p2.clip_code];
    let co = cc[0] | cc[1] | cc[2];

    if co.is_empty() {
        sink.inside(p0, p1, p2);
        return;
    }

    if !(cc[0] & cc[1] & cc[2]).is_empty() {
        sink.discarded(Discard::Outside);
        return;
    }

    let Some(plane) = (clip_bit..ClipPlane::COUNT)
        .filter_map(ClipPlane::from_index)
        .find(|plane| co.contains(plane.mask()))
    else {
        trace!("clip planes exhausted with outcode {co:?}, dropping triangle");
        sink.discarded(Discard::Numerical);
        return;
    };

    let mask = plane.mask();
    let next_bit = plane.index() + 1;
    let one_outside = !((cc[0] ^ cc[1] ^ cc[2]) & mask).is_empty();

    if one_outside {
        // q0 is the outside vertex.
        let [q0, q1, q2] = if cc[0].contains(mask) {
            [p0, p1, p2]
        } else if cc[1].contains(mask) {
            [p1, p2, p0]
        } else {
            [p2, p0, p1]
        };

        let mut tmp1 = boundary_vertex(state, plane, q0, q1);
        let mut tmp2 = boundary_vertex(state, plane, q0, q2);

        tmp1.edge_flag = q0.edge_flag;
        let q2_hidden = Vertex {
            edge_flag: false,
            ..*q2
        };
        clip_triangle(state, &tmp1, q1, &q2_hidden, next_bit, sink);

        tmp2.edge_flag = true;
        tmp1.edge_flag = false;
        clip_triangle(state, &tmp2, &tmp1, q2, next_bit, sink);
    } else {
        // q0 is the only inside vertex.
        let [q0, q1, q2] = if !cc[0].contains(mask) {
            [p0, p1, p2]
        } else if !cc[1].contains(mask) {
            [p1, p2, p0]
        } else {
            [p2, p0, p1]
        };

        let mut tmp1 = boundary_vertex(state, plane, q0, q1);
        let mut tmp2 = boundary_vertex(state, plane, q0, q2);

        tmp1.edge_flag = true;
        tmp2.edge_flag = q2.edge_flag;
        clip_triangle(state, q0, &tmp1, &tmp2, next_bit, sink);
    }
}
