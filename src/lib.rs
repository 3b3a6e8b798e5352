//! Clip-space geometry stage of a software 3D rasterizer.
//!
//! Takes projected vertices (clip space, before the perspective divide),
//! clips points, lines and triangles against the canonical view volume,
//! classifies triangle facing, applies culling and hands the surviving
//! geometry to a pixel [`Rasterizer`](render::Rasterizer) or, in selection
//! mode, to a [`SelectionBuffer`](render::SelectionBuffer).
//!
//! # Quick Start
//!
//! ```
//! use clipstage::prelude::*;
//!
//! let state = RenderState::default();
//! let mut ctx = Context::new(state, FrameBuffer::new(320, 240));
//!
//! let mut vertices = [
//!     Vertex::new(Vec4::new(-2.0, 0.0, 0.0, 1.0), Vec4::ONE, Vec2::ZERO),
//!     Vertex::new(Vec4::new(2.0, 0.0, 0.0, 1.0), Vec4::ONE, Vec2::ZERO),
//!     Vertex::new(Vec4::new(0.0, 2.0, 0.0, 1.0), Vec4::ONE, Vec2::ZERO),
//! ];
//! for v in &mut vertices {
//!     ctx.prepare_vertex(v);
//! }
//! let [a, b, c] = vertices;
//! ctx.draw_triangle(&a, &b, &c);
//! assert!(ctx.stats().triangles > 0);
//! ```

pub mod clipper;
pub mod facing;
pub mod math;
pub mod pipeline;
pub mod render;
pub mod scene;
pub mod state;
pub mod vertex;
pub mod viewport;

pub use pipeline::{Context, DrawStats};
pub use scene::{Scene, SceneError};
pub use state::RenderState;
pub use vertex::{ScreenPoint, Vertex};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use clipstage::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{ClipCode, ClipPlane, Discard};

    // Dispatch
    pub use crate::pipeline::{Context, DrawStats};

    // State
    pub use crate::state::{CullFace, FrontFace, PolygonMode, RenderMode, RenderState, ShadeModel};
    pub use crate::viewport::Viewport;

    // Math
    pub use crate::math::{Vec2, Vec3, Vec4};

    // Vertices
    pub use crate::vertex::{ScreenPoint, Vertex};

    // Output
    pub use crate::render::{FillMode, FrameBuffer, Rasterizer, SelectionBuffer};
}
