use crate::foundation::error::{ReelError, ReelResult};

pub use glam::DVec3;
use glam::{DMat4, DQuat, EulerRot};
pub use kurbo::{BezPath, Point};

/// Normalized scroll position in `[0, 1]`.
///
/// Construction clamps, so floating-point drift from the scroll source (`1.0000001`, `-0.0`,
/// `NaN`) never reaches the range mapper.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Start of the scroll container.
    pub const START: Self = Self(0.0);
    /// End of the scroll container.
    pub const END: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`; non-finite input maps to `0`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw scalar.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Bitwise identity, used to detect "progress changed since last tick".
    pub fn same_sample(self, other: Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

/// Render target size in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ReelResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ReelError::not_ready("viewport is not sized"));
        }
        Ok(Self { width, height })
    }

    pub fn aspect(self) -> f64 {
        self.width / self.height
    }
}

/// Camera placement handed to the renderer every frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
}

/// Object placement: translation, XYZ euler rotation in radians, per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform3 {
    pub position: DVec3,
    pub rotation: DVec3,
    pub scale: DVec3, // default (1,1,1)
}

impl Default for Transform3 {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

impl Transform3 {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_uniform_scale(mut self, s: f64) -> Self {
        self.scale = DVec3::splat(s);
        self
    }

    pub fn quat(&self) -> DQuat {
        let r = self.rotation;
        DQuat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }

    /// Decompose an affine matrix. Shear from non-uniform parent scale is dropped.
    pub fn from_mat4(m: DMat4) -> Self {
        let (scale, q, position) = m.to_scale_rotation_translation();
        let (x, y, z) = q.to_euler(EulerRot::XYZ);
        Self {
            position,
            rotation: DVec3::new(x, y, z),
            scale,
        }
    }

    /// Place `child` inside `self`.
    pub fn compose(&self, child: &Self) -> Self {
        if *self == Self::default() {
            return *child;
        }
        Self::from_mat4(self.to_mat4() * child.to_mat4())
    }
}

/// Straight (non-premultiplied) 8-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(s: &str) -> ReelResult<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ReelError::config(format!("color '{s}' must be #rrggbb")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ReelError::config(format!("color '{s}' has invalid hex digits")))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
