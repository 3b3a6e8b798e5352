//! Primitive entry points.
//!
//! [`Context`] routes points, lines and triangles between the unclipped fast
//! path and the clipping path, applies facing and culling to triangles, and
//! sends the result either to a [`Rasterizer`] or, in selection mode, to the
//! [`SelectionBuffer`].

use crate::clipper::line::clip_line;
use crate::clipper::triangle::{clip_triangle, TriangleSink};
use crate::clipper::Discard;
use crate::facing::{classify_triangle, signed_area, Facing};
use crate::render::{FillMode, Rasterizer, SelectionBuffer};
use crate::state::{PolygonMode, RenderState, SHADOW_MASK_MODE, SHADOW_MODE};
use crate::vertex::{ScreenPoint, Vertex};
use crate::viewport::transform_to_viewport;

/// Counters accumulated by a [`Context`] until [`Context::reset_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub points: u64,
    pub lines: u64,
    /// Triangles handed to the fill path.
    pub triangles: u64,
    pub textured_triangles: u64,
    /// Approximate pixel coverage of filled triangles.
    pub pixels: u64,
    pub outside: u64,
    pub degenerate: u64,
    pub culled: u64,
    pub numerical: u64,
}

impl DrawStats {
    fn discard(&mut self, reason: Discard) {
        match reason {
            Discard::Outside => self.outside += 1,
            Discard::Degenerate => self.degenerate += 1,
            Discard::Culled => self.culled += 1,
            Discard::Numerical => self.numerical += 1,
        }
    }
}

/// Everything a draw call writes to.
struct Target<R> {
    rasterizer: R,
    selection: SelectionBuffer,
    stats: DrawStats,
}

/// A rendering context: render state plus its output collaborators.
pub struct Context<R: Rasterizer> {
    state: RenderState,
    target: Target<R>,
}

impl<R: Rasterizer> Context<R> {
    pub fn new(state: RenderState, rasterizer: R) -> Self {
        Self {
            state,
            target: Target {
                rasterizer,
                selection: SelectionBuffer::new(),
                stats: DrawStats::default(),
            },
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Mutable render state. Only change it between primitives.
    pub fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    pub fn rasterizer(&self) -> &R {
        &self.target.rasterizer
    }

    pub fn rasterizer_mut(&mut self) -> &mut R {
        &mut self.target.rasterizer
    }

    pub fn into_rasterizer(self) -> R {
        self.target.rasterizer
    }

    pub fn selection(&self) -> &SelectionBuffer {
        &self.target.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionBuffer {
        &mut self.target.selection
    }

    pub fn stats(&self) -> DrawStats {
        self.target.stats
    }

    pub fn reset_stats(&mut self) {
        self.target.stats = DrawStats::default();
    }

    /// Bring an upstream vertex into the state this stage expects on entry:
    /// clip code computed, and screen record filled when inside.
    pub fn prepare_vertex(&self, v: &mut Vertex) {
        v.reclassify();
        if v.is_inside() {
            transform_to_viewport(&self.state, v);
        }
    }

    /// Draw a point. Points outside the view volume are dropped.
    pub fn draw_point(&mut self, p: &Vertex) {
        if !p.is_inside() {
            self.target.stats.discard(Discard::Outside);
            return;
        }
        self.target.stats.points += 1;
        if self.state.is_selecting() {
            self.target.selection.record_depths(&[p.screen.z]);
        } else {
            self.target.rasterizer.plot(&p.screen);
        }
    }

    /// Draw a line, clipping it to the view volume when it crosses it.
    pub fn draw_line(&mut self, p1: &Vertex, p2: &Vertex) {
        let Some((t_min, t_max)) = clip_line(p1, p2) else {
            self.target.stats.discard(Discard::Outside);
            return;
        };

        if (p1.clip_code | p2.clip_code).is_empty() {
            self.target.line(&self.state, &p1.screen, &p2.screen);
        } else {
            let mut q1 = p1.lerp(p2, t_min);
            let mut q2 = p1.lerp(p2, t_max);
            transform_to_viewport(&self.state, &mut q1);
            transform_to_viewport(&self.state, &mut q2);
            self.target.line(&self.state, &q1.screen, &q2.screen);
        }
    }

    /// Draw a triangle through clipping, facing and culling.
    pub fn draw_triangle(&mut self, p0: &Vertex, p1: &Vertex, p2: &Vertex) {
        let co = p0.clip_code | p1.clip_code | p2.clip_code;
        if co.is_empty() {
            self.target.triangle(&self.state, p0, p1, p2);
            return;
        }

        let mut sink = Inside {
            state: &self.state,
            target: &mut self.target,
        };
        clip_triangle(&self.state, p0, p1, p2, 0, &mut sink);
    }
}

/// Routes the inside output of the triangle clipper back into the context.
struct Inside<'a, R> {
    state: &'a RenderState,
    target: &'a mut Target<R>,
}

impl<R: Rasterizer> TriangleSink for Inside<'_, R> {
    fn inside(&mut self, p0: &Vertex, p1: &Vertex, p2: &Vertex) {
        self.target.triangle(self.state, p0, p1, p2);
    }

    fn discarded(&mut self, reason: Discard) {
        self.target.stats.discard(reason);
    }
}

impl<R: Rasterizer> Target<R> {
    fn line(&mut self, state: &RenderState, p1: &ScreenPoint, p2: &ScreenPoint) {
        self.stats.lines += 1;
        if state.is_selecting() {
            self.selection.record_depths(&[p1.z, p2.z]);
        } else if state.depth_test {
            self.rasterizer.line_z(p1, p2);
        } else {
            self.rasterizer.line(p1, p2);
        }
    }

    /// A triangle whose vertices are all inside and projected.
    fn triangle(&mut self, state: &RenderState, p0: &Vertex, p1: &Vertex, p2: &Vertex) {
        let facing = match classify_triangle(state, &p0.screen, &p1.screen, &p2.screen) {
            Ok(facing) => facing,
            Err(reason) => {
                self.stats.discard(reason);
                return;
            }
        };

        if state.is_selecting() {
            self.selection
                .record_depths(&[p0.screen.z, p1.screen.z, p2.screen.z]);
            return;
        }

        let mode = match facing {
            Facing::Front => state.polygon_mode_front,
            Facing::Back => state.polygon_mode_back,
        };
        match mode {
            PolygonMode::Fill => self.fill(state, p0, p1, p2),
            PolygonMode::Line => self.edges(state, p0, p1, p2),
            PolygonMode::Point => self.corners(p0, p1, p2),
        }
    }

    fn fill(&mut self, state: &RenderState, p0: &Vertex, p1: &Vertex, p2: &Vertex) {
        let (a, b, c) = (&p0.screen, &p1.screen, &p2.screen);

        self.stats.triangles += 1;
        self.stats.pixels += (signed_area(a, b, c).abs() / 2.0) as u64;

        if state.color_mask == 0 {
            self.rasterizer.fill_triangle(FillMode::DepthOnly, a, b, c);
        }

        let mode = fill_mode(state);
        if mode == FillMode::Mapping {
            self.stats.textured_triangles += 1;
        }
        self.rasterizer.fill_triangle(mode, a, b, c);
    }

    /// Line mode: draw the edges whose starting vertex carries the edge flag.
    fn edges(&mut self, state: &RenderState, p0: &Vertex, p1: &Vertex, p2: &Vertex) {
        for (from, to) in [(p0, p1), (p1, p2), (p2, p0)] {
            if !from.edge_flag {
                continue;
            }
            if state.depth_test {
                self.rasterizer.line_z(&from.screen, &to.screen);
            } else {
                self.rasterizer.line(&from.screen, &to.screen);
            }
        }
    }

    /// Point mode: plot the vertices that carry the edge flag.
    fn corners(&mut self, p0: &Vertex, p1: &Vertex, p2: &Vertex) {
        for p in [p0, p1, p2] {
            if p.edge_flag {
                self.rasterizer.plot(&p.screen);
            }
        }
    }
}

/// Pick the color fill for the current state.
pub fn fill_mode(state: &RenderState) -> FillMode {
    if state.shadow_mode & SHADOW_MASK_MODE != 0 {
        FillMode::FlatShadowMask
    } else if state.shadow_mode & SHADOW_MODE != 0 {
        FillMode::FlatShadow
    } else if state.texture_2d_enabled {
        FillMode::Mapping
    } else if state.is_smooth() {
        FillMode::Smooth
    } else {
        FillMode::Flat
    }
}
