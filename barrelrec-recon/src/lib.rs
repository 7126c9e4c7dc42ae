//! barrelrec-recon: Single-event hit reconstruction for the barrel detector.
//!
//! Given detected-signal records for up to three layers (first and second
//! delta-E strip layers plus a non-segmented pad) and the calibration
//! geometry, [`HitReconstructor`] computes lab-frame 3D hit positions and
//! summed deposited energies, caching results per instance.
//!
#![warn(missing_docs)]

mod cluster;
mod reconstructor;

pub use reconstructor::HitReconstructor;

// Re-export the core types callers need to drive a reconstruction.
pub use barrelrec_core::{Direction, GeometrySettings, Layer, LayerGeometry, Quadrant, SignalRecord, Vec3};
