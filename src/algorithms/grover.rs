// src/algorithms/grover.rs

//! Grover search for a single marked basis index.

use super::{clamp_qubits, most_likely};
use crate::analysis::probabilities;
use crate::circuits::CircuitBuilder;
use crate::core::{Matrix, Result, StateVector, dimension_for};
use crate::gates::{SingleQubitGate, phase_flip_oracle};
use crate::simulation::Simulator;
use crate::validation::check_basis_index;
use log::debug;
use num_complex::Complex64;
use std::f64::consts::FRAC_PI_4;

pub const MIN_QUBITS: usize = 1;
pub const MAX_QUBITS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GroverReport {
    /// Register size after clamping.
    pub num_qubits: usize,
    pub state: StateVector,
    /// Oracle + diffusion rounds applied.
    pub iterations: usize,
    /// Basis index with the highest final probability.
    pub best_index: usize,
    pub best_probability: f64,
}

/// `max(1, ⌊π/4 · √(2^n)⌋)`
pub fn grover_iterations(num_qubits: usize) -> usize {
    let n = (num_qubits as f64).exp2();
    ((FRAC_PI_4 * n.sqrt()).floor() as usize).max(1)
}

/// `D = 2|s⟩⟨s| − I` for the uniform superposition `|s⟩` of dimension `dim`.
pub fn diffusion_operator(dim: usize) -> Matrix {
    let off = 2.0 / dim as f64;
    Matrix::from_fn(dim, |r, c| {
        Complex64::new(if r == c { off - 1.0 } else { off }, 0.0)
    })
}

/// Searches `2^n` basis states for `target`, with `n` clamped to `[1, 5]`.
///
/// # Errors
/// `Dimension` if `target >= 2^n` after clamping.
pub fn grover(num_qubits: usize, target: usize) -> Result<GroverReport> {
    let n = clamp_qubits("grover", num_qubits, MIN_QUBITS, MAX_QUBITS);
    check_basis_index(target, n)?;
    let dim = dimension_for(n)?;
    let iterations = grover_iterations(n);
    debug!("grover: {} qubits, target {}, {} iterations", n, target, iterations);

    let uniform = CircuitBuilder::new().on_each(SingleQubitGate::H, 0..n).build();
    let mut state = Simulator::new().run(&uniform, &StateVector::zero(n)?)?.into_state();

    let oracle = phase_flip_oracle(n, target)?;
    let diffusion = diffusion_operator(dim);
    for _ in 0..iterations {
        state = oracle.apply(&state)?;
        state = diffusion.apply(&state)?;
    }

    let (best_index, best_probability) = most_likely(&probabilities(&state));
    debug!("grover: best index {} with probability {:.6}", best_index, best_probability);
    Ok(GroverReport { num_qubits: n, state, iterations, best_index, best_probability })
}
