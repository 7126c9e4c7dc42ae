//! Single-event hit reconstruction.

use barrelrec_core::{Direction, GeometrySettings, Layer, LayerGeometry, SignalRecord, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cluster::cluster_index;

/// A layer record bound for reconstruction, tagged with its barrel half.
#[derive(Clone, Copy)]
struct BoundLayer<'a> {
    record: &'a SignalRecord,
    direction: Direction,
}

/// Reconstructs the lab-frame hit position and deposited energy of one
/// particle from up to three bound signal records.
///
/// The reconstructor borrows its records and geometry, so it cannot outlive
/// them. It is mutable and unshared: create one instance per event (or per
/// thread) and [`clear`](Self::clear) it before reuse.
///
/// Positions and summed energies are computed lazily and cached; a bound
/// record is only read on the first query after binding. An ambiguous or
/// missing hit is not an error: the position queries return [`Vec3::ZERO`]
/// (uncached) and emit a `log` diagnostic, and event processing continues.
/// Callers must treat a zero-vector result as "unreconstructable".
pub struct HitReconstructor<'a> {
    settings: &'a GeometrySettings,
    rng: StdRng,
    first: Option<BoundLayer<'a>>,
    second: Option<BoundLayer<'a>>,
    pad: Option<&'a SignalRecord>,
    first_pos: Option<Vec3>,
    second_pos: Option<Vec3>,
    first_energy: Option<f64>,
    second_energy: Option<f64>,
}

impl<'a> HitReconstructor<'a> {
    /// Creates a reconstructor with an entropy-seeded random source.
    #[must_use]
    pub fn new(settings: &'a GeometrySettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates a reconstructor with a deterministic random source.
    ///
    /// Smeared positions are then reproducible run to run, which the
    /// simulation chain relies on when comparing reconstruction passes.
    #[must_use]
    pub fn with_seed(settings: &'a GeometrySettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &'a GeometrySettings, rng: StdRng) -> Self {
        Self {
            settings,
            rng,
            first: None,
            second: None,
            pad: None,
            first_pos: None,
            second_pos: None,
            first_energy: None,
            second_energy: None,
        }
    }

    /// Unbinds all records and discards all cached positions and energies.
    ///
    /// The random source is kept as-is, so a seeded instance stays on its
    /// deterministic draw sequence across events.
    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
        self.pad = None;
        self.first_pos = None;
        self.second_pos = None;
        self.first_energy = None;
        self.second_energy = None;
    }

    /// Binds the first-layer record and invalidates the cached first
    /// position.
    pub fn bind_first(&mut self, record: &'a SignalRecord, direction: Direction) {
        self.first = Some(BoundLayer { record, direction });
        self.first_pos = None;
    }

    /// Binds the second-layer record and invalidates the cached second
    /// position.
    pub fn bind_second(&mut self, record: &'a SignalRecord, direction: Direction) {
        self.second = Some(BoundLayer { record, direction });
        self.second_pos = None;
    }

    /// Binds the pad record.
    pub fn bind_pad(&mut self, record: &'a SignalRecord) {
        self.pad = Some(record);
    }

    /// Reconstructs the first-layer hit position.
    ///
    /// With `smear` the hit is placed uniformly within its strip/ring bin,
    /// otherwise at the bin center. The first successful result is cached
    /// and returned unchanged by later calls, regardless of their `smear`
    /// argument.
    ///
    /// In single-sided mode (positive gas target length) the in-plane
    /// coordinate is not measured; it is inferred from the second layer, so
    /// this call computes and caches [`second_position`](Self::second_position)
    /// as a side effect.
    ///
    /// Returns [`Vec3::ZERO`] if no record is bound or the hit is ambiguous.
    pub fn first_position(&mut self, smear: bool) -> Vec3 {
        let Some(bound) = self.first else {
            return Vec3::ZERO;
        };
        if let Some(cached) = self.first_pos {
            return cached;
        }
        let position = if self.settings.is_single_sided() {
            self.single_sided_first_position(bound, smear)
        } else {
            self.double_sided_position(Layer::First, bound, smear)
        };
        match position {
            Some(position) => {
                self.first_pos = Some(position);
                position
            }
            None => Vec3::ZERO,
        }
    }

    /// Reconstructs the second-layer hit position.
    ///
    /// The second layer is always read out double-sided, so both the strip
    /// and the ring coordinate are measured directly. Clustering, smearing,
    /// failure and caching behave as in [`first_position`](Self::first_position),
    /// with an independent cache.
    pub fn second_position(&mut self, smear: bool) -> Vec3 {
        let Some(bound) = self.second else {
            return Vec3::ZERO;
        };
        if let Some(cached) = self.second_pos {
            return cached;
        }
        match self.double_sided_position(Layer::Second, bound, smear) {
            Some(position) => {
                self.second_pos = Some(position);
                position
            }
            None => Vec3::ZERO,
        }
    }

    /// Sum of the first-layer record's per-strip deposited energies.
    ///
    /// Returns 0 if no record is bound; otherwise the sum is cached until
    /// [`clear`](Self::clear) (rebinding alone does not invalidate it).
    /// `verbose` emits a running trace on the log facade only.
    pub fn first_delta_e_energy(&mut self, verbose: bool) -> f64 {
        if let Some(energy) = self.first_energy {
            return energy;
        }
        let Some(bound) = self.first else {
            return 0.0;
        };
        let energy = sum_strip_energies(bound.record, Layer::First, verbose);
        self.first_energy = Some(energy);
        energy
    }

    /// Sum of the second-layer record's per-strip deposited energies.
    ///
    /// Same caching policy as [`first_delta_e_energy`](Self::first_delta_e_energy).
    pub fn second_delta_e_energy(&mut self, verbose: bool) -> f64 {
        if let Some(energy) = self.second_energy {
            return energy;
        }
        let Some(bound) = self.second else {
            return 0.0;
        };
        let energy = sum_strip_energies(bound.record, Layer::Second, verbose);
        self.second_energy = Some(energy);
        energy
    }

    /// Total deposited energy of the pad record, 0 if none is bound.
    ///
    /// Plain passthrough, not cached.
    #[must_use]
    pub fn pad_energy(&self) -> f64 {
        self.pad.map_or(0.0, |record| record.total_energy)
    }

    /// Sub-bin offset added to a clustered index: uniform in (0, 1] when
    /// smearing, bin center otherwise.
    fn bin_offset(&mut self, smear: bool) -> f64 {
        if smear {
            // 1 - U[0,1) shifts the hit anywhere within its bin, excluding
            // the lower edge
            1.0 - self.rng.gen::<f64>()
        } else {
            0.5
        }
    }

    /// Position on a double-sided layer: strip and ring both measured.
    fn double_sided_position(
        &mut self,
        layer: Layer,
        bound: BoundLayer<'_>,
        smear: bool,
    ) -> Option<Vec3> {
        let record = bound.record;
        let label = layer.label();
        let strip = cluster_index(&record.strips, record.neighboring_strips, label, "strips")?
            + self.bin_offset(smear);
        let ring = cluster_index(&record.rings, record.neighboring_rings, label, "rings")?
            + self.bin_offset(smear);

        let geometry = self.settings.layer(layer, bound.direction);
        let quadrant = record.quadrant;
        let q = quadrant.index();

        let z = axial_position(geometry, bound.direction, q, strip);
        // re-center the ring index so its range is symmetric around zero,
        // then convert to a physical in-plane offset
        let centered = ring - geometry.length_x / geometry.strip_width / 2.0;
        let offset = quadrant.ring_orientation() * centered * geometry.strip_width;
        let (x, y) = quadrant.in_plane_xy(geometry.distance_to_beam[q], offset);

        Some(Vec3::new(x, y, z))
    }

    /// First-layer position in single-sided mode: only the strip coordinate
    /// is measured; the in-plane coordinate is taken from the second layer
    /// and scaled down to the first layer's distance to beam.
    fn single_sided_first_position(
        &mut self,
        bound: BoundLayer<'_>,
        smear: bool,
    ) -> Option<Vec3> {
        let record = bound.record;
        let strip = cluster_index(&record.strips, record.neighboring_strips, "first", "strips")?
            + self.bin_offset(smear);

        // Make sure the second position has been computed; a failed second
        // reconstruction leaves the scaled in-plane coordinate at zero.
        let second = self.second_position(smear);

        let settings = self.settings;
        let geometry = settings.layer(Layer::First, bound.direction);
        let second_geometry = settings.layer(Layer::Second, bound.direction);
        let quadrant = record.quadrant;
        let q = quadrant.index();

        let scale = geometry.distance_to_beam[q] / second_geometry.distance_to_beam[q];
        let in_plane = quadrant.in_plane_component(second) * scale;
        let (x, y) = quadrant.in_plane_xy(geometry.distance_to_beam[q], in_plane);
        let z = axial_position(geometry, bound.direction, q, strip);

        Some(Vec3::new(x, y, z))
    }
}

/// Z coordinate of a fractional strip index. Strip 0 sits closest to the
/// target, so the forward and backward halves count in opposite directions.
fn axial_position(
    geometry: &LayerGeometry,
    direction: Direction,
    quadrant_index: usize,
    strip: f64,
) -> f64 {
    let half_length = geometry.length_y / 2.0;
    match direction {
        Direction::Forward => {
            geometry.pos_z[quadrant_index] - half_length + strip * geometry.strip_width
        }
        Direction::Backward => {
            geometry.pos_z[quadrant_index] + half_length - strip * geometry.strip_width
        }
    }
}

fn sum_strip_energies(record: &SignalRecord, layer: Layer, verbose: bool) -> f64 {
    let mut sum = 0.0;
    for energy in &record.strip_energies {
        sum += energy;
        if verbose {
            log::debug!("{} layer energy sum: {sum}", layer.label());
        }
    }
    sum
}
