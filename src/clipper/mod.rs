//! Homogeneous clip-space clipping.
//!
//! - [`outcode`]: per-vertex classification against the six planes.
//! - [`plane`]: exact segment/plane intersection.
//! - [`attributes`]: color/texture interpolation for synthesized vertices.
//! - [`line`]: parametric line clipping.
//! - [`triangle`]: recursive plane-by-plane triangle subdivision.

pub mod attributes;
pub mod line;
pub mod outcode;
pub mod plane;
pub mod triangle;

pub use line::clip_line;
pub use outcode::{classify, ClipCode, ClipPlane};
pub use plane::intersect;
pub use triangle::{clip_triangle, TriangleSink};

/// Why a primitive produced no output. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discard {
    /// Every vertex is outside one common plane.
    Outside,
    /// Zero signed area in device space.
    Degenerate,
    /// Removed by face culling.
    Culled,
    /// Clip codes report a violated plane that was already processed. Only
    /// happens through floating point rounding.
    Numerical,
}
