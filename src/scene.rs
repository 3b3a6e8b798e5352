//! JSON scene descriptions.
//!
//! A scene bundles render state overrides with a list of primitives given in
//! clip space. It stands in for the transform stage when driving the clip
//! stage from the command line or from tests:
//!
//! ```json
//! {
//!   "state": { "cull_face_enabled": true },
//!   "primitives": [
//!     { "triangle": [
//!         { "position": [-2.0, 0.0, 0.0, 1.0], "color": [1.0, 0.0, 0.0, 1.0] },
//!         { "position": [ 2.0, 0.0, 0.0, 1.0] },
//!         { "position": [ 0.0, 2.0, 0.0, 1.0] }
//!     ] }
//!   ]
//! }
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::math::{Vec2, Vec4};
use crate::pipeline::Context;
use crate::render::Rasterizer;
use crate::state::RenderState;
use crate::vertex::Vertex;

/// Errors that can occur when loading a scene or writing its output.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scene: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Convert a vertex description the way the transform stage would hand it
/// over: classified, and projected when inside.
fn prepare<R: Rasterizer>(ctx: &Context<R>, desc: VertexDesc) -> Vertex {
    let mut v = Vertex::from(desc);
    ctx.prepare_vertex(&mut v);
    v
}

fn default_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_edge_flag() -> bool {
    true
}

/// A vertex as written in a scene file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VertexDesc {
    pub position: [f32; 4],
    #[serde(default = "default_color")]
    pub color: [f32; 4],
    #[serde(default)]
    pub tex_coord: [f32; 2],
    #[serde(default = "default_edge_flag")]
    pub edge_flag: bool,
}

impl From<VertexDesc> for Vertex {
    fn from(desc: VertexDesc) -> Self {
        Vertex::new(
            Vec4::from(desc.position),
            Vec4::from(desc.color),
            Vec2::from(desc.tex_coord),
        )
        .with_edge_flag(desc.edge_flag)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Point(VertexDesc),
    Line([VertexDesc; 2]),
    Triangle([VertexDesc; 3]),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub state: RenderState,
    #[serde(default)]
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        debug!("parsed scene with {} primitives", scene.primitives.len());
        Ok(scene)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        debug!("loading scene from {}", path.as_ref().display());
        Self::from_json(&json)
    }

    /// Draw every primitive into `ctx`. The context's own state is used, so
    /// callers normally build it from [`Scene::state`].
    pub fn render<R: Rasterizer>(&self, ctx: &mut Context<R>) {
        for primitive in &self.primitives {
            match *primitive {
                Primitive::Point(p) => {
                    let p = prepare(ctx, p);
                    ctx.draw_point(&p);
                }
                Primitive::Line([a, b]) => {
                    let (a, b) = (prepare(ctx, a), prepare(ctx, b));
                    ctx.draw_line(&a, &b);
                }
                Primitive::Triangle([a, b, c]) => {
                    let (a, b, c) = (prepare(ctx, a), prepare(ctx, b), prepare(ctx, c));
                    ctx.draw_triangle(&a, &b, &c);
                }
            }
        }
    }
}
