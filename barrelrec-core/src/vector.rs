//! Lab-frame 3D vector type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position vector in the lab frame (millimetres, beam along +z).
///
/// Comparison is exact: reconstruction results are cached and callers may
/// rely on bit-identical values across repeated queries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component (beam axis).
    pub z: f64,
}

impl Vec3 {
    /// The zero vector, used as the "unreconstructable" return value.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns true if all components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Distance from the beam axis (transverse magnitude).
    #[inline]
    #[must_use]
    pub fn perp(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean magnitude.
    #[inline]
    #[must_use]
    pub fn mag(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}
