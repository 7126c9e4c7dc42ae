//! Detected-signal records and the barrel half tag.

use crate::geometry::Quadrant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which half of the barrel a layer belongs to, relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Beam-downstream half. Strip 0 is closest to the target.
    Forward,
    /// Beam-upstream half.
    Backward,
}

impl Direction {
    /// Lowercase label for diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// One detected layer's worth of discretized hit data.
///
/// Strip indices run perpendicular to the beam, ring indices parallel to it
/// (rings are only meaningful for double-sided readout). The neighboring
/// flags tell the reconstruction whether a multi-index set forms one cluster
/// or an ambiguous hit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalRecord {
    /// Barrel segment the layer sits in.
    pub quadrant: Quadrant,
    /// Hit strip indices (perpendicular to beam).
    pub strips: Vec<u16>,
    /// Hit ring indices (parallel to beam, double-sided readout only).
    pub rings: Vec<u16>,
    /// True if the hit strips are adjacent (one physical cluster).
    pub neighboring_strips: bool,
    /// True if the hit rings are adjacent.
    pub neighboring_rings: bool,
    /// Deposited energy per hit strip.
    pub strip_energies: Vec<f64>,
    /// Total deposited energy (pad detectors only).
    pub total_energy: f64,
}

impl SignalRecord {
    /// Creates an empty record for the given quadrant.
    #[must_use]
    pub fn new(quadrant: Quadrant) -> Self {
        Self {
            quadrant,
            strips: Vec::new(),
            rings: Vec::new(),
            neighboring_strips: false,
            neighboring_rings: false,
            strip_energies: Vec::new(),
            total_energy: 0.0,
        }
    }

    /// Sets the hit strip indices and their adjacency flag.
    #[must_use]
    pub fn with_strips(mut self, strips: Vec<u16>, neighboring: bool) -> Self {
        self.strips = strips;
        self.neighboring_strips = neighboring;
        self
    }

    /// Sets the hit ring indices and their adjacency flag.
    #[must_use]
    pub fn with_rings(mut self, rings: Vec<u16>, neighboring: bool) -> Self {
        self.rings = rings;
        self.neighboring_rings = neighboring;
        self
    }

    /// Sets the per-strip deposited energies.
    #[must_use]
    pub fn with_strip_energies(mut self, energies: Vec<f64>) -> Self {
        self.strip_energies = energies;
        self
    }

    /// Sets the total deposited energy (pad detectors).
    #[must_use]
    pub fn with_total_energy(mut self, energy: f64) -> Self {
        self.total_energy = energy;
        self
    }
}
