use std::f64::consts::PI;

#[inline]
pub fn lennard_jones(rij2: f64) -> f64 {
    if rij2 < 1e-12 {
        return 1e10;
    }
    let sig_by_r6 = (1.0 / rij2).powi(3);
    let sig_by_r12 = sig_by_r6 * sig_by_r6;
    4.0 * (sig_by_r12 - sig_by_r6)
}

#[inline]
pub fn tail_correction(cutoff: f64, num_particles: usize, volume: f64) -> f64 {
    let sig_by_cutoff3 = (1.0 / cutoff).powi(3);
    let sig_by_cutoff9 = sig_by_cutoff3.powi(3);
    let n = num_particles as f64;
    (sig_by_cutoff9 - 3.0 * sig_by_cutoff3) * 8.0 / 9.0 * PI * n * n / volume
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn lennard_jones_at_sigma_returns_zero() {
        assert!(f64_approx_equal(lennard_jones(1.0), 0.0));
    }

    #[test]
    fn lennard_jones_at_minimum_returns_negative_unit_well_depth() {
        // Minimum of the reduced 12-6 potential is at r = 2^(1/6), i.e. r^2 = 2^(1/3).
        let r2_min = 2.0f64.powf(1.0 / 3.0);
        assert!(f64_approx_equal(lennard_jones(r2_min), -1.0));
    }

    #[test]
    fn lennard_jones_below_sigma_is_repulsive() {
        assert!(lennard_jones(0.81) > 0.0);
    }

    #[test]
    fn lennard_jones_at_very_small_separation_returns_large_positive_energy() {
        assert!(f64_approx_equal(lennard_jones(1e-14), 1e10));
    }

    #[test]
    fn lennard_jones_decays_toward_zero_at_long_range() {
        let energy = lennard_jones(100.0);
        assert!(energy < 0.0);
        assert!(energy.abs() < 1e-5);
    }

    #[test]
    fn tail_correction_is_negative_beyond_the_zero_crossing() {
        assert!(tail_correction(3.0, 100, 1000.0) < 0.0);
    }

    #[test]
    fn tail_correction_scales_with_particle_count_squared() {
        let single = tail_correction(3.0, 100, 1000.0);
        let doubled = tail_correction(3.0, 200, 1000.0);
        assert!(f64_approx_equal(doubled, 4.0 * single));
    }

    #[test]
    fn tail_correction_matches_reference_value() {
        // N = 100, V = 512 (8^3 box), rc = 3.0, reduced units.
        let expected = 8.0 / 9.0 * std::f64::consts::PI * 100.0 * 100.0 / 512.0
            * (3.0f64.powi(-9) - 3.0 * 3.0f64.powi(-3));
        assert!(f64_approx_equal(tail_correction(3.0, 100, 512.0), expected));
    }
}
