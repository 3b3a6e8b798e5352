//! Reference pixel rasterizer.
//!
//! Owns a color buffer and a 16-bit depth buffer and implements
//! [`Rasterizer`] with an edge-function triangle fill and Bresenham lines.
//! Device depth grows towards the viewer, so a fragment passes the depth
//! test when its depth is greater than or equal to the stored one.

use std::path::Path;

use super::{FillMode, Rasterizer};
use crate::vertex::ScreenPoint;
use crate::viewport::Z_FRAC_BITS;

/// Color written by the shadow fills.
const SHADOW_COLOR: u32 = 0xFF00_0000;

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<u16>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![0xFF00_0000; size],
            depth_buffer: vec![0; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
        self.depth_buffer.fill(0);
    }

    /// Get the ARGB color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    pub fn depth(&self, x: i32, y: i32) -> Option<u16> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    /// Write the color buffer to an image file (format from the extension).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let img = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[(y * self.width + x) as usize];
            image::Rgba([
                (argb >> 16) as u8,
                (argb >> 8) as u8,
                argb as u8,
                (argb >> 24) as u8,
            ])
        });
        img.save(path)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, z: i32, color: Option<u32>, depth_test: bool) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let z = (z >> Z_FRAC_BITS).clamp(0, u16::MAX as i32) as u16;
        if depth_test && z < self.depth_buffer[idx] {
            return;
        }
        self.depth_buffer[idx] = z;
        if let Some(color) = color {
            self.color_buffer[idx] = color;
        }
    }

    /// Bresenham line with depth interpolated along the major axis.
    fn draw_line(&mut self, p0: &ScreenPoint, p1: &ScreenPoint, depth_test: bool) {
        let (x1, y1) = (p1.x, p1.y);
        let dx = (x1 - p0.x).abs();
        let dy = (y1 - p0.y).abs();
        let steps = dx.max(dy);

        let x_step = if p0.x < x1 { 1 } else { -1 };
        let y_step = if p0.y < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = p0.x;
        let mut y = p0.y;
        let mut step = 0;

        loop {
            let t = if steps == 0 {
                0.0
            } else {
                step as f32 / steps as f32
            };
            let z = lerp_i32(p0.z, p1.z, t);
            let color = pack(
                lerp_i32(p0.r, p1.r, t),
                lerp_i32(p0.g, p1.g, t),
                lerp_i32(p0.b, p1.b, t),
            );
            self.put(x, y, z, Some(color), depth_test);

            if x == x1 && y == y1 {
                break;
            }
            step += 1;

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }
}

impl Rasterizer for FrameBuffer {
    fn plot(&mut self, p: &ScreenPoint) {
        self.put(p.x, p.y, p.z, Some(pack(p.r, p.g, p.b)), true);
    }

    fn line(&mut self, p0: &ScreenPoint, p1: &ScreenPoint) {
        self.draw_line(p0, p1, false);
    }

    fn line_z(&mut self, p0: &ScreenPoint, p1: &ScreenPoint) {
        self.draw_line(p0, p1, true);
    }

    fn fill_triangle(
        &mut self,
        mode: FillMode,
        p0: &ScreenPoint,
        p1: &ScreenPoint,
        p2: &ScreenPoint,
    ) {
        let area = edge_function(p0, p1, p2.x, p2.y);
        if area == 0 {
            return;
        }

        // The last vertex provides the color of flat fills.
        let flat = pack(p2.r, p2.g, p2.b);

        let min_x = p0.x.min(p1.x).min(p2.x).max(0);
        let max_x = p0.x.max(p1.x).max(p2.x).min(self.width as i32 - 1);
        let min_y = p0.y.min(p1.y).min(p2.y).max(0);
        let max_y = p0.y.max(p1.y).max(p2.y).min(self.height as i32 - 1);

        let inv_area = 1.0 / area as f32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let w0 = edge_function(p1, p2, x, y);
                let w1 = edge_function(p2, p0, x, y);
                let w2 = edge_function(p0, p1, x, y);

                let inside = if area > 0 {
                    w0 >= 0 && w1 >= 0 && w2 >= 0
                } else {
                    w0 <= 0 && w1 <= 0 && w2 <= 0
                };
                if !inside {
                    continue;
                }

                let l = [
                    w0 as f32 * inv_area,
                    w1 as f32 * inv_area,
                    w2 as f32 * inv_area,
                ];
                let z = barycentric(l, p0.z, p1.z, p2.z);
                let color = match mode {
                    FillMode::DepthOnly => None,
                    FillMode::FlatShadow | FillMode::FlatShadowMask => Some(SHADOW_COLOR),
                    FillMode::Flat => Some(flat),
                    FillMode::Smooth | FillMode::Mapping => Some(pack(
                        barycentric(l, p0.r, p1.r, p2.r),
                        barycentric(l, p0.g, p1.g, p2.g),
                        barycentric(l, p0.b, p1.b, p2.b),
                    )),
                };
                self.put(x, y, z, color, true);
            }
        }
    }
}

/// Twice the signed area of (a, b, p), in i64 to hold device-sized products.
#[inline]
fn edge_function(a: &ScreenPoint, b: &ScreenPoint, px: i32, py: i32) -> i64 {
    (px - a.x) as i64 * (b.y - a.y) as i64 - (py - a.y) as i64 * (b.x - a.x) as i64
}

#[inline]
fn barycentric(l: [f32; 3], a: i32, b: i32, c: i32) -> i32 {
    // Relative to `a` so constant attributes come out exact.
    a + (l[1] * (b - a) as f32 + l[2] * (c - a) as f32) as i32
}

#[inline]
fn lerp_i32(a: i32, b: i32, t: f32) -> i32 {
    a + ((b - a) as f32 * t) as i32
}

/// Pack quantized 16-bit channels into opaque ARGB8888.
#[inline]
fn pack(r: i32, g: i32, b: i32) -> u32 {
    let c = |v: i32| (v.clamp(0, 0xFFFF) as u32) >> 8;
    0xFF00_0000 | (c(r) << 16) | (c(g) << 8) | c(b)
}
