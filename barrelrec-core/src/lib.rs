//! barrelrec-core: Core types for silicon-strip barrel hit reconstruction.
//!
//! This crate provides the foundational types shared by the reconstruction
//! component: lab-frame vectors, detected-signal records, and the
//! calibration geometry tables of the double-layer barrel detector.
//!

pub mod error;
pub mod geometry;
pub mod signal;
pub mod vector;

pub use error::{Error, Result};
pub use geometry::{GeometrySettings, Layer, LayerGeometry, Quadrant};
pub use signal::{Direction, SignalRecord};
pub use vector::Vec3;
