//! Outcode classification against the six planes of the canonical view volume.
//!
//! In homogeneous clip space the view volume is:
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//! -w <= z <= w
//! ```
//!
//! Each plane owns one bit of a [`ClipCode`]. A set bit means the point lies
//! strictly outside that plane; points exactly on a plane are inside.

use bitflags::bitflags;

use crate::math::{Axis, Vec4};

bitflags! {
    /// Which view-volume planes a point lies outside of.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ClipCode: u8 {
        const XMIN = 1 << 0;
        const XMAX = 1 << 1;
        const YMIN = 1 << 2;
        const YMAX = 1 << 3;
        const ZMIN = 1 << 4;
        const ZMAX = 1 << 5;
    }
}

impl ClipCode {
    /// True when the point is inside the whole view volume.
    #[inline]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}

/// The six planes of the view volume, in clipping order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipPlane {
    /// x >= -w
    XMin,
    /// x <= w
    XMax,
    /// y >= -w
    YMin,
    /// y <= w
    YMax,
    /// z >= -w
    ZMin,
    /// z <= w
    ZMax,
}

impl ClipPlane {
    pub const COUNT: usize = 6;

    pub const ALL: [ClipPlane; Self::COUNT] = [
        ClipPlane::XMin,
        ClipPlane::XMax,
        ClipPlane::YMin,
        ClipPlane::YMax,
        ClipPlane::ZMin,
        ClipPlane::ZMax,
    ];

    /// The plane owning bit `index` of a [`ClipCode`], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn mask(self) -> ClipCode {
        ClipCode::from_bits_retain(1 << self.index())
    }

    /// The coordinate this plane constrains.
    pub fn axis(self) -> Axis {
        match self {
            Self::XMin | Self::XMax => Axis::X,
            Self::YMin | Self::YMax => Axis::Y,
            Self::ZMin | Self::ZMax => Axis::Z,
        }
    }

    /// -1 for the MIN planes, +1 for the MAX planes.
    pub fn sign(self) -> f32 {
        match self {
            Self::XMin | Self::YMin | Self::ZMin => -1.0,
            Self::XMax | Self::YMax | Self::ZMax => 1.0,
        }
    }

    /// Whether `p` violates this plane's half-space test.
    #[inline]
    pub fn is_outside(self, p: Vec4) -> bool {
        let coord = p.axis(self.axis());
        if self.sign() < 0.0 {
            coord < -p.w
        } else {
            coord > p.w
        }
    }
}

/// Compute the outcode of a clip-space position.
#[inline]
pub fn classify(p: Vec4) -> ClipCode {
    let mut code = ClipCode::empty();
    if p.x < -p.w {
        code |= ClipCode::XMIN;
    }
    if p.x > p.w {
        code |= ClipCode::XMAX;
    }
    if p.y < -p.w {
        code |= ClipCode::YMIN;
    }
    if p.y > p.w {
        code |= ClipCode::YMAX;
    }
    if p.z < -p.w {
        code |= ClipCode::ZMIN;
    }
    if p.z > p.w {
        code |= ClipCode::ZMAX;
    }
    code
}
