// src/algorithms/qpe.rs

//! Quantum phase estimation for `U = diag(1, e^{2πiθ})`.
//!
//! Qubits `0..m` form the counting register; qubit `m` is the target,
//! prepared in the eigenstate |1⟩ of `U`.

use super::qft::inverse_qft_matrix;
use super::{clamp_qubits, most_likely};
use crate::analysis::{basis_label, probabilities};
use crate::circuits::CircuitBuilder;
use crate::core::{Matrix, Result, StateVector, dimension_for};
use crate::gates::{SingleQubitGate, controlled_phase};
use crate::simulation::Simulator;
use crate::validation::check_finite_angle;
use log::debug;
use std::f64::consts::PI;

pub const MIN_COUNTING: usize = 1;
pub const MAX_COUNTING: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct QpeReport {
    /// Counting register size after clamping.
    pub num_counting: usize,
    /// Final state over `num_counting + 1` qubits.
    pub state: StateVector,
    /// Marginal distribution of the counting register (length `2^m`).
    pub counting_probabilities: Vec<f64>,
    /// Most likely counting-register value.
    pub best_pattern: usize,
    /// `best_pattern` as an m-bit string.
    pub best_bits: String,
    pub best_probability: f64,
    /// `best_pattern / 2^m`
    pub estimate: f64,
}

/// Estimates `theta` with `m` counting qubits, `m` clamped to `[1, 6]`.
///
/// # Errors
/// `Dimension` if `theta` is NaN or infinite.
pub fn phase_estimation(num_counting: usize, theta: f64) -> Result<QpeReport> {
    check_finite_angle(theta, "phase")?;
    let m = clamp_qubits("phase-estimation", num_counting, MIN_COUNTING, MAX_COUNTING);
    let total = m + 1;
    let counting_dim = dimension_for(m)?;
    debug!("phase-estimation: {} counting qubits, theta {}", m, theta);

    // |0...0⟩ on the counting register, |1⟩ on the target.
    let initial = StateVector::basis(total, counting_dim)?;
    let hadamards = CircuitBuilder::new().on_each(SingleQubitGate::H, 0..m).build();
    let mut state = Simulator::new().run(&hadamards, &initial)?.into_state();

    for j in 0..m {
        let angle = 2.0 * PI * theta * (1u64 << j) as f64;
        state = controlled_phase(j, m, total, angle)?.apply(&state)?;
    }

    // Target is the high factor of the tensor product.
    let inverse_qft = Matrix::identity(2).kron(&inverse_qft_matrix(m)?);
    state = inverse_qft.apply(&state)?;

    let mut counting_probabilities = vec![0.0; counting_dim];
    for (idx, p) in probabilities(&state).into_iter().enumerate() {
        counting_probabilities[idx & (counting_dim - 1)] += p;
    }
    let (best_pattern, best_probability) = most_likely(&counting_probabilities);
    let estimate = best_pattern as f64 / counting_dim as f64;
    debug!("phase-estimation: best pattern {} (p = {:.6}), estimate {}", best_pattern, best_probability, estimate);

    Ok(QpeReport {
        num_counting: m,
        state,
        counting_probabilities,
        best_pattern,
        best_bits: basis_label(best_pattern, m),
        best_probability,
        estimate,
    })
}
