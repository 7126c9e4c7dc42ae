//! Calibration geometry tables and barrel quadrant conventions.

use crate::error::{Error, Result};
use crate::signal::Direction;
use crate::vector::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Azimuthal barrel segment, looking downstream along the beam.
///
/// The numeric ids 0-3 follow the detector convention top, left, bottom,
/// right. Each quadrant fixes the sign and axis assignment of the in-plane
/// coordinates:
///
/// ```text
/// quadrant   0 top   1 left   2 bottom   3 right
/// x          +pos    +dtb     -pos       -dtb
/// y          +dtb    -pos     -dtb       +pos
/// ```
///
/// where `dtb` is the quadrant's distance-to-beam constant and `pos` the
/// measured in-plane offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quadrant {
    /// Quadrant 0, above the beam.
    Top,
    /// Quadrant 1, beam-left.
    Left,
    /// Quadrant 2, below the beam.
    Bottom,
    /// Quadrant 3, beam-right.
    Right,
}

impl Quadrant {
    /// Numeric id used to index the per-quadrant calibration arrays.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Assembles the in-plane `(x, y)` pair from the radial constant and the
    /// signed in-plane offset, per the quadrant sign table.
    #[inline]
    #[must_use]
    pub fn in_plane_xy(self, radial: f64, in_plane: f64) -> (f64, f64) {
        match self {
            Self::Top => (in_plane, radial),
            Self::Left => (radial, in_plane),
            Self::Bottom => (in_plane, -radial),
            Self::Right => (-radial, in_plane),
        }
    }

    /// Sign relating a ring-derived offset to the quadrant's in-plane axis.
    #[inline]
    #[must_use]
    pub fn ring_orientation(self) -> f64 {
        match self {
            Self::Top | Self::Right => -1.0,
            Self::Left | Self::Bottom => 1.0,
        }
    }

    /// Extracts the in-plane component of a lab-frame vector for this
    /// quadrant (x for top/bottom, y for left/right).
    #[inline]
    #[must_use]
    pub fn in_plane_component(self, v: Vec3) -> f64 {
        match self {
            Self::Top | Self::Bottom => v.x,
            Self::Left | Self::Right => v.y,
        }
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Self::Top),
            1 => Ok(Self::Left),
            2 => Ok(Self::Bottom),
            3 => Ok(Self::Right),
            other => Err(Error::InvalidQuadrant(other)),
        }
    }
}

/// Which barrel layer a settings table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layer {
    /// Inner delta-E layer.
    First,
    /// Outer delta-E layer.
    Second,
}

impl Layer {
    /// Lowercase label for diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

/// Calibration geometry of one layer in one barrel half.
///
/// Lengths and positions are in millimetres in the lab frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerGeometry {
    /// Perpendicular distance from the beam axis to each quadrant's plane.
    pub distance_to_beam: [f64; 4],
    /// Z position of each quadrant's reference point.
    pub pos_z: [f64; 4],
    /// Pitch of the strip segmentation.
    pub strip_width: f64,
    /// Sensitive length along the ring direction (in-plane, across the beam).
    pub length_x: f64,
    /// Sensitive length along the strip direction (beam axis extent).
    pub length_y: f64,
}

impl LayerGeometry {
    fn validate(&self, layer: Layer, direction: Direction) -> Result<()> {
        if self.strip_width <= 0.0 {
            return Err(Error::InvalidStripWidth {
                layer: layer.label(),
                direction: direction.label(),
                width: self.strip_width,
            });
        }
        for length in [self.length_x, self.length_y] {
            if length <= 0.0 {
                return Err(Error::InvalidSensitiveLength {
                    layer: layer.label(),
                    direction: direction.label(),
                    length,
                });
            }
        }
        Ok(())
    }
}

/// Read-only geometry and calibration constants for the whole barrel.
///
/// One [`LayerGeometry`] per {first, second} layer x {forward, backward}
/// half, plus the gas-target-length flag that selects the first layer's
/// readout mode: a positive gas target length means single-sided strip
/// detectors (ring coordinate inferred from the second layer), otherwise
/// double-sided readout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometrySettings {
    /// First layer, forward half.
    pub first_forward: LayerGeometry,
    /// First layer, backward half.
    pub first_backward: LayerGeometry,
    /// Second layer, forward half.
    pub second_forward: LayerGeometry,
    /// Second layer, backward half.
    pub second_backward: LayerGeometry,
    /// Gas target length; > 0 selects single-sided first-layer readout.
    pub gas_target_length: f64,
}

impl GeometrySettings {
    /// Returns the geometry table for the given layer and barrel half.
    #[inline]
    #[must_use]
    pub fn layer(&self, layer: Layer, direction: Direction) -> &LayerGeometry {
        match (layer, direction) {
            (Layer::First, Direction::Forward) => &self.first_forward,
            (Layer::First, Direction::Backward) => &self.first_backward,
            (Layer::Second, Direction::Forward) => &self.second_forward,
            (Layer::Second, Direction::Backward) => &self.second_backward,
        }
    }

    /// True if the first layer is read out single-sided (gas target run).
    #[inline]
    #[must_use]
    pub fn is_single_sided(&self) -> bool {
        self.gas_target_length > 0.0
    }

    /// Fail-fast consistency check of all four layer tables.
    ///
    /// # Errors
    ///
    /// Returns an error if any strip width or sensitive length is not
    /// strictly positive.
    pub fn validate(&self) -> Result<()> {
        self.first_forward.validate(Layer::First, Direction::Forward)?;
        self.first_backward
            .validate(Layer::First, Direction::Backward)?;
        self.second_forward
            .validate(Layer::Second, Direction::Forward)?;
        self.second_backward
            .validate(Layer::Second, Direction::Backward)?;
        Ok(())
    }
}
