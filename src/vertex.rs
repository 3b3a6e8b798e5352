//! Vertex records flowing through the clip stage.

use crate::clipper::outcode::{classify, ClipCode};
use crate::math::{Vec2, Vec4};

/// A vertex in device space, ready for the pixel rasterizer.
///
/// Coordinates, color and texture values are quantized integers. Only valid
/// when the owning [`Vertex`] is inside the view volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub s: i32,
    pub t: i32,
}

/// A vertex after projection, before the viewport transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Homogeneous clip-space position.
    pub clip_pos: Vec4,
    /// RGBA color in [0, 1].
    pub color: Vec4,
    pub tex_coord: Vec2,
    /// Device-space record, filled by the viewport transform.
    pub screen: ScreenPoint,
    pub clip_code: ClipCode,
    /// Whether the edge from this vertex to the next one in triangle order
    /// is a user-visible edge.
    pub edge_flag: bool,
}

impl Vertex {
    /// Create a vertex and compute its clip code.
    ///
    /// The screen record is left zeroed; run the viewport transform on inside
    /// vertices before drawing them.
    pub fn new(clip_pos: Vec4, color: Vec4, tex_coord: Vec2) -> Self {
        Self {
            clip_pos,
            color,
            tex_coord,
            screen: ScreenPoint::default(),
            clip_code: classify(clip_pos),
            edge_flag: true,
        }
    }

    pub fn with_edge_flag(mut self, edge_flag: bool) -> Self {
        self.edge_flag = edge_flag;
        self
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.clip_code.is_inside()
    }

    /// Recompute the clip code from the current position.
    pub fn reclassify(&mut self) {
        self.clip_code = classify(self.clip_pos);
    }

    /// Plain linear interpolation of position and color, as used for line
    /// clipping. Texture coordinates and the edge flag are taken from `self`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let clip_pos = self.clip_pos.lerp(other.clip_pos, t);
        Self {
            clip_pos,
            color: self.color.lerp(other.color, t),
            clip_code: classify(clip_pos),
            ..*self
        }
    }
}
