// src/analysis/mod.rs

//! Read-only views of a state: outcome probabilities, sampling, phases,
//! entanglement measures and the Dirac-notation rendering.

mod dirac;
mod entanglement;

pub use dirac::{basis_label, to_dirac};
pub use entanglement::{
    entanglement_entropy, exact_entanglement_entropy, reduced_density_matrix, reduced_probabilities,
    schmidt_rank, schmidt_rank_bound,
};

use crate::core::StateVector;
use crate::core::constants::qvis_constants::ZERO_NORM_EPSILON;
use num_complex::Complex64;
use rand::Rng;

/// `|c_i|²` for every basis index.
pub fn probabilities(state: &StateVector) -> Vec<f64> {
    state.amplitudes().iter().map(|c| c.norm_sqr()).collect()
}

/// Samples one outcome by inverse-CDF lookup.
///
/// Draws `r` uniformly from `[0, 1)` and returns the smallest index whose
/// cumulative probability is at least `r`. If rounding leaves the total
/// below `r`, the last index is returned. The state is not collapsed.
pub fn measure<R: Rng + ?Sized>(state: &StateVector, rng: &mut R) -> usize {
    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, p) in probabilities(state).into_iter().enumerate() {
        cumulative += p;
        if r <= cumulative {
            return i;
        }
    }
    state.dim() - 1
}

/// [`measure`] with the thread-local RNG.
pub fn measure_random(state: &StateVector) -> usize {
    measure(state, &mut rand::rng())
}

/// `|c|`
pub fn magnitude(c: Complex64) -> f64 {
    c.norm()
}

/// `atan2(im, re)` in radians.
pub fn phase(c: Complex64) -> f64 {
    c.im.atan2(c.re)
}

/// Phase of the first amplitude whose magnitude exceeds `1e-10`, or 0.
pub fn global_phase(state: &StateVector) -> f64 {
    state
        .amplitudes()
        .iter()
        .find(|c| magnitude(**c) > ZERO_NORM_EPSILON)
        .map_or(0.0, |c| phase(*c))
}
