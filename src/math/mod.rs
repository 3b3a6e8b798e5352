//! Small fixed-size vector types used throughout the clip stage.

pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::{Axis, Vec4};
