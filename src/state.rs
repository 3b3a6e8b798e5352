//! Render state consulted by every draw call.
//!
//! A [`RenderState`] is created once per rendering context and only mutated
//! between primitives. It deserializes from JSON with every field optional,
//! so a scene file only needs to list what differs from [`Default`].

use serde::Deserialize;

use crate::math::Vec4;
use crate::viewport::Viewport;

/// Shading model, deciding how colors are interpolated across clipped edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadeModel {
    /// The provoking vertex color is used for the whole primitive.
    Flat,
    #[default]
    Smooth,
}

/// Which faces are discarded when culling is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CullFace {
    Front,
    #[default]
    Back,
    /// Culls every triangle.
    FrontAndBack,
}

/// Winding order of front-facing triangles in normalized device space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontFace {
    #[default]
    Ccw,
    Cw,
}

/// How a triangle that survives culling is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonMode {
    Point,
    Line,
    #[default]
    Fill,
}

/// Normal rendering or selection (picking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Render,
    /// Primitives record depth ranges into the selection buffer instead of
    /// touching pixels.
    Select,
}

/// Shadow fill selection bits.
pub const SHADOW_MASK_MODE: u8 = 1 << 0;
pub const SHADOW_MODE: u8 = 1 << 1;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderState {
    pub shade_model: ShadeModel,
    pub texture_2d_enabled: bool,
    /// When disabled, every projected vertex takes `current_color`.
    pub lighting_enabled: bool,
    pub current_color: [f32; 4],
    pub depth_test: bool,
    pub cull_face_enabled: bool,
    pub cull_face: CullFace,
    pub front_face: FrontFace,
    pub polygon_mode_front: PolygonMode,
    pub polygon_mode_back: PolygonMode,
    /// Zero requests a depth-only pass in addition to the regular fill.
    pub color_mask: u32,
    /// Combination of [`SHADOW_MASK_MODE`] and [`SHADOW_MODE`].
    pub shadow_mode: u8,
    pub render_mode: RenderMode,
    pub viewport: Viewport,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            shade_model: ShadeModel::default(),
            texture_2d_enabled: false,
            lighting_enabled: false,
            current_color: [1.0, 1.0, 1.0, 1.0],
            depth_test: true,
            cull_face_enabled: false,
            cull_face: CullFace::default(),
            front_face: FrontFace::default(),
            polygon_mode_front: PolygonMode::default(),
            polygon_mode_back: PolygonMode::default(),
            color_mask: 0xFFFF_FFFF,
            shadow_mode: 0,
            render_mode: RenderMode::default(),
            viewport: Viewport::new(0, 0, 320, 240),
        }
    }
}

impl RenderState {
    pub fn current_color(&self) -> Vec4 {
        Vec4::from(self.current_color)
    }

    pub fn is_smooth(&self) -> bool {
        self.shade_model == ShadeModel::Smooth
    }

    pub fn is_selecting(&self) -> bool {
        self.render_mode == RenderMode::Select
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let state: RenderState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, RenderState::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let state: RenderState = serde_json::from_str(
            r#"{
                "shade_model": "flat",
                "cull_face_enabled": true,
                "cull_face": "front_and_back",
                "front_face": "cw",
                "polygon_mode_back": "line",
                "render_mode": "select",
                "viewport": { "x": 0, "y": 0, "width": 64, "height": 32 }
            }"#,
        )
        .unwrap();
        assert_eq!(state.shade_model, ShadeModel::Flat);
        assert!(state.cull_face_enabled);
        assert_eq!(state.cull_face, CullFace::FrontAndBack);
        assert_eq!(state.front_face, FrontFace::Cw);
        assert_eq!(state.polygon_mode_front, PolygonMode::Fill);
        assert_eq!(state.polygon_mode_back, PolygonMode::Line);
        assert!(state.is_selecting());
        assert_eq!(state.viewport.width(), 64);
        assert!(state.depth_test);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result: Result<RenderState, _> = serde_json::from_str(r#"{"cull_face": "sideways"}"#);
        assert!(result.is_err());
    }
}
