// src/algorithms/qft.rs

//! Quantum Fourier transform as an explicit `N × N` matrix.

use super::clamp_qubits;
use crate::core::{Matrix, Result, StateVector, dimension_for};
use log::debug;
use num_complex::Complex64;
use std::f64::consts::PI;

pub const MIN_QUBITS: usize = 1;
pub const MAX_QUBITS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct QftReport {
    /// Register size after clamping.
    pub num_qubits: usize,
    /// The basis index that was transformed.
    pub input: usize,
    pub state: StateVector,
}

/// `F[j][k] = e^{2πi·jk/N} / √N` with `N = 2^n`.
pub fn qft_matrix(num_qubits: usize) -> Result<Matrix> {
    let dim = dimension_for(num_qubits)?;
    let scale = 1.0 / (dim as f64).sqrt();
    Ok(Matrix::from_fn(dim, |j, k| {
        // Reducing jk mod N first keeps the angle small.
        let angle = 2.0 * PI * ((j * k) % dim) as f64 / dim as f64;
        Complex64::from_polar(scale, angle)
    }))
}

/// `F†`, the inverse transform.
pub fn inverse_qft_matrix(num_qubits: usize) -> Result<Matrix> {
    Ok(qft_matrix(num_qubits)?.dagger())
}

/// Applies the QFT to `|k⟩` with `n` clamped to `[1, 6]`.
///
/// # Errors
/// `Dimension` if `k >= 2^n` after clamping.
pub fn qft(num_qubits: usize, k: usize) -> Result<QftReport> {
    let n = clamp_qubits("qft", num_qubits, MIN_QUBITS, MAX_QUBITS);
    let input = StateVector::basis(n, k)?;
    debug!("qft: {} qubits, input |{}>", n, k);
    let state = qft_matrix(n)?.apply(&input)?;
    Ok(QftReport { num_qubits: n, input: k, state })
}
