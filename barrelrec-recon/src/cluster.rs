//! Strip/ring index clustering.
//!
//! Both layers and both segmentation directions share one selection rule, so
//! the four call sites funnel through a single routine.

/// Collapses a set of hit indices to one fractional index.
///
/// Returns the arithmetic mean if the indices are flagged as neighboring,
/// the index itself if exactly one was hit, and `None` for an ambiguous hit
/// (two or more non-adjacent indices) or an empty set. Failures are normal
/// algorithmic outcomes, reported through the log facade only.
///
/// `layer` and `kind` label the diagnostics ("first"/"second",
/// "strips"/"rings").
pub(crate) fn cluster_index(
    indices: &[u16],
    neighboring: bool,
    layer: &str,
    kind: &str,
) -> Option<f64> {
    if indices.is_empty() {
        log::warn!("{layer} layer: no hit {kind} found");
        return None;
    }
    if neighboring {
        #[allow(clippy::cast_precision_loss)]
        let count = indices.len() as f64;
        let sum: f64 = indices.iter().map(|&i| f64::from(i)).sum();
        return Some(sum / count);
    }
    if indices.len() > 1 {
        log::warn!(
            "{layer} layer: found {} {kind} {:?} but not neighboring",
            indices.len(),
            indices
        );
        return None;
    }
    Some(f64::from(indices[0]))
}
