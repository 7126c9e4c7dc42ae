//! Error types for barrelrec-core.

use thiserror::Error;

/// Result type alias for barrelrec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised when building records or geometry tables.
///
/// Reconstruction itself never returns these: ambiguous or missing hits are
/// normal algorithmic outcomes signalled by a zero-vector result. Errors here
/// mean the *inputs* are malformed and are raised fail-fast at construction.
#[derive(Error, Debug)]
pub enum Error {
    /// Quadrant identifier outside the 0-3 barrel segment range.
    #[error("invalid quadrant id: {0} (expected 0-3)")]
    InvalidQuadrant(u8),

    /// Strip width must be strictly positive to map indices to positions.
    #[error("non-positive strip width {width} for {layer} layer ({direction})")]
    InvalidStripWidth {
        /// Layer label ("first" or "second").
        layer: &'static str,
        /// Direction label ("forward" or "backward").
        direction: &'static str,
        /// Offending width value.
        width: f64,
    },

    /// Sensitive-area extent must be strictly positive.
    #[error("non-positive sensitive length {length} for {layer} layer ({direction})")]
    InvalidSensitiveLength {
        /// Layer label ("first" or "second").
        layer: &'static str,
        /// Direction label ("forward" or "backward").
        direction: &'static str,
        /// Offending length value.
        length: f64,
    },
}
