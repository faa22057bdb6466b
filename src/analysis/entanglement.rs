// src/analysis/entanglement.rs

//! Bipartite entanglement measures.
//!
//! The n qubits are split into subsystem A, the high `m` qubits, and
//! subsystem B, the low `n - m` qubits. Basis index `i` sits at row
//! `i / 2^(n-m)` and column `i % 2^(n-m)` of the coefficient matrix `M`.

use crate::core::constants::qvis_constants::{ENTROPY_EPSILON, ZERO_NORM_EPSILON};
use crate::core::{Matrix, QvisError, Result, StateVector, dimension_for};
use crate::validation::check_state_qubits;
use num_complex::Complex64;

const EIGEN_TOLERANCE: f64 = 1e-12;

/// Resolves the split point and returns `(2^m, 2^(n-m))`.
fn split(state: &StateVector, num_qubits: usize, split_at: usize) -> Result<(usize, usize)> {
    check_state_qubits(state, num_qubits)?;
    if split_at > num_qubits {
        return Err(QvisError::dimension(format!(
            "split point {} exceeds {} qubits", split_at, num_qubits
        )));
    }
    Ok((dimension_for(split_at)?, dimension_for(num_qubits - split_at)?))
}

/// `−Σ p log2 p`, clamped at zero: an eigenvalue of `1 + ε` would
/// otherwise give a tiny negative entropy.
fn shannon_bits(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|&p| p > ENTROPY_EPSILON)
        .map(|p| -p * p.log2())
        .sum::<f64>()
        .max(0.0)
}

/// Marginal outcome distribution of subsystem A (length `2^m`).
pub fn reduced_probabilities(state: &StateVector, num_qubits: usize, split_at: usize) -> Result<Vec<f64>> {
    let (rows, cols) = split(state, num_qubits, split_at)?;
    let mut marginal = vec![0.0; rows];
    for (i, c) in state.amplitudes().iter().enumerate() {
        marginal[i / cols] += c.norm_sqr();
    }
    Ok(marginal)
}

/// Entropy in bits of the basis-diagonal marginal of subsystem A.
///
/// This is the Shannon entropy of [`reduced_probabilities`], which equals
/// the von Neumann entropy only when `ρ_A` is diagonal in the computational
/// basis. [`exact_entanglement_entropy`] uses the eigenvalues instead.
/// `split_at` defaults to `⌊n/2⌋`.
pub fn entanglement_entropy(state: &StateVector, num_qubits: usize, split_at: Option<usize>) -> Result<f64> {
    let m = split_at.unwrap_or(num_qubits / 2);
    Ok(shannon_bits(reduced_probabilities(state, num_qubits, m)?))
}

/// `ρ_A = M M†`, the reduced density matrix of subsystem A.
pub fn reduced_density_matrix(state: &StateVector, num_qubits: usize, split_at: usize) -> Result<Matrix> {
    let (rows, cols) = split(state, num_qubits, split_at)?;
    let amps = state.amplitudes();
    Ok(Matrix::from_fn(rows, |r, s| {
        (0..cols)
            .map(|k| amps[r * cols + k] * amps[s * cols + k].conj())
            .sum::<Complex64>()
    }))
}

fn reduced_spectrum(state: &StateVector, num_qubits: usize, split_at: usize) -> Result<Vec<f64>> {
    reduced_density_matrix(state, num_qubits, split_at)?.hermitian_eigenvalues(EIGEN_TOLERANCE)
}

/// Von Neumann entropy `−Σ λ log2 λ` over the eigenvalues of `ρ_A`.
/// `split_at` defaults to `⌊n/2⌋`.
pub fn exact_entanglement_entropy(state: &StateVector, num_qubits: usize, split_at: Option<usize>) -> Result<f64> {
    let m = split_at.unwrap_or(num_qubits / 2);
    Ok(shannon_bits(reduced_spectrum(state, num_qubits, m)?))
}

/// Number of non-zero Schmidt coefficients across the A|B cut, counted as
/// eigenvalues of `ρ_A` above `1e-10`. `split_at` defaults to `⌊n/2⌋`.
pub fn schmidt_rank(state: &StateVector, num_qubits: usize, split_at: Option<usize>) -> Result<usize> {
    let m = split_at.unwrap_or(num_qubits / 2);
    Ok(reduced_spectrum(state, num_qubits, m)?
        .into_iter()
        .filter(|&l| l > ZERO_NORM_EPSILON)
        .count())
}

/// Cheap upper bound on the Schmidt rank: `min(nonzero amplitudes, 2^m, 2^(n-m))`.
pub fn schmidt_rank_bound(state: &StateVector, num_qubits: usize, split_at: Option<usize>) -> Result<usize> {
    let m = split_at.unwrap_or(num_qubits / 2);
    let (rows, cols) = split(state, num_qubits, m)?;
    let nonzero = state.amplitudes().iter().filter(|c| c.norm() > ZERO_NORM_EPSILON).count();
    Ok(nonzero.min(rows).min(cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use approx::assert_abs_diff_eq;

    fn plus_plus() -> StateVector {
        StateVector::from_pairs(&[(0.5, 0.0), (0.5, 0.0), (0.5, 0.0), (0.5, 0.0)]).unwrap()
    }

    #[test]
    fn bell_state_has_one_bit_of_entropy() -> Result<()> {
        let bell = StateVector::bell(2)?;
        assert_abs_diff_eq!(entanglement_entropy(&bell, 2, None)?, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(exact_entanglement_entropy(&bell, 2, None)?, 1.0, epsilon = 1e-9);
        assert_eq!(schmidt_rank(&bell, 2, None)?, 2);
        Ok(())
    }

    #[test]
    fn approximate_entropy_overcounts_product_superpositions() -> Result<()> {
        // |+>|+> is a product state, but its diagonal marginal is uniform.
        let state = plus_plus();
        assert_abs_diff_eq!(entanglement_entropy(&state, 2, Some(1))?, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(exact_entanglement_entropy(&state, 2, Some(1))?, 0.0, epsilon = 1e-9);
        assert_eq!(schmidt_rank(&state, 2, Some(1))?, 1);
        assert_eq!(schmidt_rank_bound(&state, 2, Some(1))?, 2);
        Ok(())
    }

    #[test]
    fn reduced_probabilities_index_high_bits() -> Result<()> {
        // |110> : high qubit (2) is 1 when split at m = 1.
        let state = StateVector::basis(3, 6)?;
        assert_eq!(reduced_probabilities(&state, 3, 1)?, vec![0.0, 1.0]);
        // m = 2 keeps qubits 2 and 1 -> row 3.
        assert_eq!(reduced_probabilities(&state, 3, 2)?, vec![0.0, 0.0, 0.0, 1.0]);
        Ok(())
    }

    #[test]
    fn reduced_density_matrix_diagonal_matches_marginal() -> Result<()> {
        let w = StateVector::w(3)?;
        let rho = reduced_density_matrix(&w, 3, 1)?;
        let marginal = reduced_probabilities(&w, 3, 1)?;
        for (i, p) in marginal.iter().enumerate() {
            assert_abs_diff_eq!(rho[(i, i)].re, *p, epsilon = 1e-12);
        }
        assert!(rho.is_hermitian(1e-12));
        Ok(())
    }

    #[test]
    fn ghz_entropy_across_any_cut() -> Result<()> {
        let ghz = StateVector::ghz(4)?;
        for m in 1..4 {
            assert_abs_diff_eq!(exact_entanglement_entropy(&ghz, 4, Some(m))?, 1.0, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn trivial_cuts_and_bad_splits() -> Result<()> {
        let bell = StateVector::bell(2)?;
        assert_abs_diff_eq!(entanglement_entropy(&bell, 2, Some(0))?, 0.0);
        assert_eq!(entanglement_entropy(&bell, 2, Some(3)).unwrap_err().kind(), ErrorKind::Dimension);
        assert_eq!(entanglement_entropy(&bell, 3, None).unwrap_err().kind(), ErrorKind::Dimension);
        Ok(())
    }

    #[test]
    fn entropy_is_never_negative_at_trivial_cuts() -> Result<()> {
        assert_eq!(shannon_bits([1.0 + 4.0 * f64::EPSILON]), 0.0);

        let amps: Vec<Complex64> = (0..64)
            .map(|i| Complex64::from_polar(1.0 + (i % 7) as f64, 0.37 * i as f64))
            .collect();
        let state = StateVector::custom(amps)?;
        for m in [0, 6] {
            let exact = exact_entanglement_entropy(&state, 6, Some(m))?;
            assert!(exact >= 0.0, "split {} gave {}", m, exact);
            assert_abs_diff_eq!(exact, 0.0, epsilon = 1e-9);
        }
        Ok(())
    }
}
