//! The pixel-level collaborators of the clip stage.
//!
//! The clip stage never touches pixels itself. It hands fully-resolved
//! [`ScreenPoint`]s to a [`Rasterizer`] in normal rendering, or depth ranges
//! to a [`SelectionBuffer`] in selection mode.

mod framebuffer;
mod selection;

pub use framebuffer::FrameBuffer;
pub use selection::{SelectHit, SelectionBuffer};

use crate::vertex::ScreenPoint;

/// Triangle fill variants requested from the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Depth buffer only, color untouched.
    DepthOnly,
    /// Flat fill through the shadow mask.
    FlatShadowMask,
    /// Flat shadow fill.
    FlatShadow,
    /// Perspective texture mapping of the bound texture.
    Mapping,
    /// Gouraud interpolation of vertex colors.
    Smooth,
    /// Single color.
    Flat,
}

/// Primitive drawing operations of a pixel rasterizer.
///
/// All points passed in lie inside the viewport.
pub trait Rasterizer {
    /// Plot a single pixel.
    fn plot(&mut self, p: &ScreenPoint);

    /// Draw a line without depth testing.
    fn line(&mut self, p0: &ScreenPoint, p1: &ScreenPoint);

    /// Draw a depth-tested line.
    fn line_z(&mut self, p0: &ScreenPoint, p1: &ScreenPoint);

    /// Fill a triangle.
    fn fill_triangle(
        &mut self,
        mode: FillMode,
        p0: &ScreenPoint,
        p1: &ScreenPoint,
        p2: &ScreenPoint,
    );
}

impl<R: Rasterizer + ?Sized> Rasterizer for &mut R {
    fn plot(&mut self, p: &ScreenPoint) {
        (**self).plot(p)
    }

    fn line(&mut self, p0: &ScreenPoint, p1: &ScreenPoint) {
        (**self).line(p0, p1)
    }

    fn line_z(&mut self, p0: &ScreenPoint, p1: &ScreenPoint) {
        (**self).line_z(p0, p1)
    }

    fn fill_triangle(
        &mut self,
        mode: FillMode,
        p0: &ScreenPoint,
        p1: &ScreenPoint,
        p2: &ScreenPoint,
    ) {
        (**self).fill_triangle(mode, p0, p1, p2)
    }
}
