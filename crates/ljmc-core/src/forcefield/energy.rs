use crate::models::coordinates::CoordinateSet;
use tracing::instrument;

/// Returns one particle's energy contribution: the sum of its coordinate row,
/// as a single-precision float.
///
/// `box_length` is part of the call signature the host code uses for all of
/// its energy kernels, but this kernel does not apply periodic boundary
/// conditions and ignores it.
///
/// `i_particle` must be a valid row index; the kernel performs no bounds
/// checking of its own, so an out-of-range index panics via matrix indexing.
#[instrument(level = "trace", skip(coords), fields(num_particles = coords.num_particles()))]
pub fn particle_energy(coords: &CoordinateSet, i_particle: usize, _box_length: f32) -> f32 {
    coords.matrix().row(i_particle).sum() as f32
}
