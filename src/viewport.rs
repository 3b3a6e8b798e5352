//! Mapping from clip space to quantized device coordinates.

use serde::Deserialize;

use crate::math::{Vec3, Vec4};
use crate::state::RenderState;
use crate::vertex::Vertex;

/// Integer bits of a device depth value.
pub const Z_BITS: u32 = 16;
/// Fractional bits of a device depth value.
pub const Z_FRAC_BITS: u32 = 14;

pub const COLOR_MIN: i32 = 1 << 10;
pub const COLOR_MAX: i32 = (1 << 16) - (1 << 10);

pub const ST_MIN: i32 = 1 << 13;
pub const ST_MAX: i32 = (1 << 22) - (1 << 13);

/// The viewport as written in configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewportRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// The device rectangle plus the derived per-axis scale and translation.
///
/// Clip-space `[-1, 1]` on each axis maps onto `[x, x + width - 1]`,
/// `[y + height - 1, y]` (y points down on screen) and the full depth range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "ViewportRect")]
pub struct Viewport {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    scale: Vec3,
    trans: Vec3,
}

impl From<ViewportRect> for Viewport {
    fn from(rect: ViewportRect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        let xsize = width as f32;
        let ysize = height as f32;
        let zsize = (1u32 << (Z_BITS + Z_FRAC_BITS)) as f32;

        let half_x = (xsize - 0.5) / 2.0;
        let half_y = (ysize - 0.5) / 2.0;
        let half_z = (zsize - 0.5) / 2.0;

        Self {
            x,
            y,
            width,
            height,
            scale: Vec3::new(half_x, -half_y, -half_z),
            trans: Vec3::new(
                half_x + x as f32,
                half_y + y as f32,
                half_z + (1u32 << Z_FRAC_BITS) as f32 / 2.0,
            ),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Perspective-divide `p` and map it to device coordinates.
    #[inline]
    pub fn to_device(&self, p: Vec4) -> (i32, i32, i32) {
        let winv = 1.0 / p.w;
        let d = (p.xyz() * winv).hadamard(self.scale) + self.trans;
        (d.x as i32, d.y as i32, d.z as i32)
    }
}

#[inline]
fn quantize_color(c: f32) -> i32 {
    (c * (COLOR_MAX - COLOR_MIN) as f32 + COLOR_MIN as f32) as i32
}

#[inline]
fn quantize_st(c: f32) -> i32 {
    (c * (ST_MAX - ST_MIN) as f32 + ST_MIN as f32) as i32
}

/// Fill `v.screen` from the vertex's clip position, color and texture
/// coordinate.
///
/// With lighting disabled the context's current color is written instead of
/// the vertex color. Texture values are only written when texturing is
/// enabled.
pub fn transform_to_viewport(state: &RenderState, v: &mut Vertex) {
    let (x, y, z) = state.viewport.to_device(v.clip_pos);
    v.screen.x = x;
    v.screen.y = y;
    v.screen.z = z;

    let color = if state.lighting_enabled {
        v.color
    } else {
        state.current_color()
    };
    v.screen.r = quantize_color(color.x);
    v.screen.g = quantize_color(color.y);
    v.screen.b = quantize_color(color.z);

    if state.texture_2d_enabled {
        v.screen.s = quantize_st(v.tex_coord.x);
        v.screen.t = quantize_st(v.tex_coord.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn state(width: u32, height: u32) -> RenderState {
        RenderState {
            viewport: Viewport::new(0, 0, width, height),
            ..RenderState::default()
        }
    }

    #[test]
    fn corners_map_inside_device_rect() {
        let vp = Viewport::new(0, 0, 320, 240);
        assert_eq!(vp.to_device(Vec4::point(-1.0, 1.0, 0.0)).0, 0);
        assert_eq!(vp.to_device(Vec4::point(-1.0, 1.0, 0.0)).1, 0);
        assert_eq!(vp.to_device(Vec4::point(1.0, -1.0, 0.0)).0, 319);
        assert_eq!(vp.to_device(Vec4::point(1.0, -1.0, 0.0)).1, 239);
    }

    #[test]
    fn perspective_divide_is_applied() {
        let vp = Viewport::new(0, 0, 320, 240);
        let a = vp.to_device(Vec4::new(0.5, 0.5, 0.5, 1.0));
        let b = vp.to_device(Vec4::new(1.0, 1.0, 1.0, 2.0));
        assert_eq!(a, b);
    }

    #[test]
    fn viewport_offset_translates_device_coords() {
        let vp = Viewport::new(10, 20, 320, 240);
        let (x, y, _) = vp.to_device(Vec4::point(-1.0, 1.0, 0.0));
        assert_eq!((x, y), (10, 20));
    }

    #[test]
    fn near_depth_is_larger_than_far_depth() {
        let vp = Viewport::new(0, 0, 320, 240);
        let (_, _, near) = vp.to_device(Vec4::point(0.0, 0.0, -1.0));
        let (_, _, far) = vp.to_device(Vec4::point(0.0, 0.0, 1.0));
        assert!(near > far);
        assert!(far > 0);
    }

    #[test]
    fn lighting_disabled_uses_current_color() {
        let mut s = state(64, 64);
        s.current_color = [0.0, 0.0, 0.0, 1.0];
        let mut v = Vertex::new(Vec4::point(0.0, 0.0, 0.0), Vec4::ONE, Vec2::ZERO);
        transform_to_viewport(&s, &mut v);
        assert_eq!(v.screen.r, COLOR_MIN);

        s.lighting_enabled = true;
        transform_to_viewport(&s, &mut v);
        assert_eq!(v.screen.r, COLOR_MAX);
        assert_eq!(v.screen.g, COLOR_MAX);
    }

    #[test]
    fn texture_written_only_when_enabled() {
        let mut s = state(64, 64);
        let mut v = Vertex::new(Vec4::point(0.0, 0.0, 0.0), Vec4::ONE, Vec2::new(1.0, 0.0));
        transform_to_viewport(&s, &mut v);
        assert_eq!((v.screen.s, v.screen.t), (0, 0));

        s.texture_2d_enabled = true;
        transform_to_viewport(&s, &mut v);
        assert_eq!(v.screen.s, ST_MAX);
        assert_eq!(v.screen.t, ST_MIN);
    }
}
