use ::ljmc::forcefield::energy;
use ::ljmc::models::coordinates::CoordinateSet;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Calculates energy of a single particle.
///
/// The `_cpp` suffix is historical; callers of the original extension import
/// this name, so it stays.
#[pyfunction]
fn get_particle_energy_cpp(
    coords: Vec<Vec<f64>>,
    i_particle: usize,
    box_length: f32,
) -> PyResult<f32> {
    let coords = CoordinateSet::from_rows(&coords)
        .map_err(|e| PyValueError::new_err(format!("invalid coordinate table: {e}")))?;
    Ok(energy::particle_energy(&coords, i_particle, box_length))
}

/// Native functions used in the MC code.
#[pymodule]
fn ljmc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_particle_energy_cpp, m)?)?;
    Ok(())
}
