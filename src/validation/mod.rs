// src/validation/mod.rs

//! Checks shared by gate lifting, the interpreter and the algorithm drivers.

use crate::core::constants::qvis_constants::DEFAULT_NORM_TOLERANCE;
use crate::core::{QvisError, Result, StateVector};

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `1e-9`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QvisError::NotNormalized)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(QvisError::NotNormalized { norm_sqr })
    } else {
        Ok(())
    }
}

/// Fails unless `qubit < num_qubits`.
pub fn check_qubit_index(qubit: usize, num_qubits: usize) -> Result<()> {
    if qubit >= num_qubits {
        return Err(QvisError::dimension(format!(
            "qubit index {} out of range for {} qubits", qubit, num_qubits
        )));
    }
    Ok(())
}

/// Fails if a two-qubit gate names the same qubit twice.
pub fn check_distinct_qubits(first: usize, second: usize) -> Result<()> {
    if first == second {
        return Err(QvisError::dimension(format!(
            "two-qubit gate needs distinct qubits, got {} twice", first
        )));
    }
    Ok(())
}

/// Fails if an angle or phase is NaN or infinite.
pub fn check_finite_angle(value: f64, what: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(QvisError::dimension(format!("{} must be finite, got {}", what, value)));
    }
    Ok(())
}

/// Fails unless `index < 2^num_qubits`.
pub fn check_basis_index(index: usize, num_qubits: usize) -> Result<()> {
    let dim = crate::core::dimension_for(num_qubits)?;
    if index >= dim {
        return Err(QvisError::dimension(format!(
            "basis index {} out of range [0, {}) for {} qubits", index, dim, num_qubits
        )));
    }
    Ok(())
}

/// Fails unless the state has exactly `2^num_qubits` amplitudes.
pub fn check_state_qubits(state: &StateVector, num_qubits: usize) -> Result<()> {
    if state.num_qubits() != num_qubits {
        return Err(QvisError::dimension(format!(
            "state has {} amplitudes ({} qubits), expected {} qubits",
            state.dim(), state.num_qubits(), num_qubits
        )));
    }
    Ok(())
}

/// Performs the checks applied between steps in strict mode: the state must
/// span `num_qubits` qubits and be normalized within `norm_tolerance`.
pub fn validate_state(state: &StateVector, num_qubits: usize, norm_tolerance: Option<f64>) -> Result<()> {
    check_state_qubits(state, num_qubits)?;
    check_normalization(state, norm_tolerance)?;
    Ok(())
}
