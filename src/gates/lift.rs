// src/gates/lift.rs

//! Embedding of local gates into the full `2^n`-dimensional operator space.
//!
//! Single-qubit gates are lifted by Kronecker product with identities. The
//! two-qubit gates are built directly by walking every basis index and
//! computing its destination index or diagonal phase, which handles
//! non-adjacent control/target pairs without reordering qubits.

use crate::core::{Matrix, QvisError, Result, dimension_for};
use crate::validation::{check_distinct_qubits, check_qubit_index};
use num_complex::Complex64;
use num_traits::One;

/// Lifts a 2×2 `gate` acting on `target` to an n-qubit operator.
///
/// The result is the tensor product over qubits `n-1` down to `0`, with
/// `gate` in position `target` and identity elsewhere. The leftmost (most
/// significant) factor is the highest qubit index.
pub fn lift_single(gate: &Matrix, num_qubits: usize, target: usize) -> Result<Matrix> {
    if gate.dim() != 2 {
        return Err(QvisError::dimension(format!(
            "single-qubit gate must be 2x2, got {0}x{0}", gate.dim()
        )));
    }
    check_qubit_index(target, num_qubits)?;
    dimension_for(num_qubits)?;

    let identity = Matrix::identity(2);
    let mut lifted: Option<Matrix> = None;
    for qubit in (0..num_qubits).rev() {
        let factor = if qubit == target { gate } else { &identity };
        lifted = Some(match lifted {
            Some(m) => m.kron(factor),
            None => factor.clone(),
        });
    }
    // num_qubits >= 1 is guaranteed by the index check above.
    lifted.ok_or_else(|| QvisError::dimension("cannot lift a gate onto zero qubits"))
}

fn check_pair(first: usize, second: usize, num_qubits: usize) -> Result<usize> {
    check_qubit_index(first, num_qubits)?;
    check_qubit_index(second, num_qubits)?;
    check_distinct_qubits(first, second)?;
    dimension_for(num_qubits)
}

/// CNOT as a `2^n × 2^n` permutation: basis index `s` goes to `s` with the
/// target bit flipped whenever the control bit of `s` is 1.
pub fn lift_cnot(control: usize, target: usize, num_qubits: usize) -> Result<Matrix> {
    let dim = check_pair(control, target, num_qubits)?;
    Matrix::from_permutation(dim, |s| {
        if (s >> control) & 1 == 1 { s ^ (1 << target) } else { s }
    })
}

/// CZ as a diagonal: −1 where both qubits are 1, +1 elsewhere.
pub fn lift_cz(control: usize, target: usize, num_qubits: usize) -> Result<Matrix> {
    let dim = check_pair(control, target, num_qubits)?;
    let diagonal: Vec<Complex64> = (0..dim)
        .map(|s| {
            let both = (s >> control) & 1 == 1 && (s >> target) & 1 == 1;
            if both { Complex64::new(-1.0, 0.0) } else { Complex64::one() }
        })
        .collect();
    Ok(Matrix::from_diagonal(&diagonal))
}

/// SWAP as a permutation exchanging the bits of `q1` and `q2`.
pub fn lift_swap(q1: usize, q2: usize, num_qubits: usize) -> Result<Matrix> {
    let dim = check_pair(q1, q2, num_qubits)?;
    Matrix::from_permutation(dim, |s| {
        let bit1 = (s >> q1) & 1;
        let bit2 = (s >> q2) & 1;
        if bit1 != bit2 { s ^ (1 << q1) ^ (1 << q2) } else { s }
    })
}

/// Controlled phase: multiplies by `e^{i·angle}` (radians) wherever both
/// `control` and `target` bits are 1.
pub fn controlled_phase(control: usize, target: usize, num_qubits: usize, angle: f64) -> Result<Matrix> {
    let dim = check_pair(control, target, num_qubits)?;
    let phase = Complex64::from_polar(1.0, angle);
    let diagonal: Vec<Complex64> = (0..dim)
        .map(|s| {
            if (s >> control) & 1 == 1 && (s >> target) & 1 == 1 { phase } else { Complex64::one() }
        })
        .collect();
    Ok(Matrix::from_diagonal(&diagonal))
}

/// Diagonal oracle built from one complex value per basis index.
pub fn diagonal_oracle(values: &[Complex64]) -> Result<Matrix> {
    if values.is_empty() || !values.len().is_power_of_two() {
        return Err(QvisError::dimension(format!(
            "oracle diagonal length {} is not a power of two", values.len()
        )));
    }
    Ok(Matrix::from_diagonal(values))
}

/// Phase-flip oracle: −1 at `marked`, +1 elsewhere.
pub fn phase_flip_oracle(num_qubits: usize, marked: usize) -> Result<Matrix> {
    crate::validation::check_basis_index(marked, num_qubits)?;
    let dim = dimension_for(num_qubits)?;
    let values: Vec<Complex64> = (0..dim)
        .map(|i| if i == marked { Complex64::new(-1.0, 0.0) } else { Complex64::one() })
        .collect();
    diagonal_oracle(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::gates::{hadamard, pauli_x};
    use num_traits::Zero;

    fn basis(dim: usize, index: usize) -> Vec<Complex64> {
        let mut v = vec![Complex64::zero(); dim];
        v[index] = Complex64::one();
        v
    }

    fn argmax(v: &[Complex64]) -> usize {
        v.iter()
            .enumerate()
            .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
            .map(|(i, _)| i)
            .unwrap()
    }

    #[test]
    fn lift_single_respects_bit_order() {
        // X on qubit 1 of 3 maps |000> to |010> (index 2).
        let m = lift_single(&pauli_x(), 3, 1).unwrap();
        assert_eq!(m.dim(), 8);
        assert_eq!(argmax(&m.mul_vec(&basis(8, 0)).unwrap()), 2);
        // X on qubit 0 maps |000> to |001> (index 1).
        let m0 = lift_single(&pauli_x(), 3, 0).unwrap();
        assert_eq!(argmax(&m0.mul_vec(&basis(8, 0)).unwrap()), 1);
    }

    #[test]
    fn lifted_gates_stay_unitary() {
        assert!(lift_single(&hadamard(), 3, 2).unwrap().is_unitary(1e-12));
        assert!(lift_cnot(0, 2, 3).unwrap().is_unitary(1e-12));
        assert!(lift_swap(2, 0, 3).unwrap().is_unitary(1e-12));
        assert!(controlled_phase(0, 2, 3, 0.7).unwrap().is_unitary(1e-12));
    }

    #[test]
    fn cnot_with_non_adjacent_qubits() {
        // control 0, target 2: |001> (1) -> |101> (5)
        let m = lift_cnot(0, 2, 3).unwrap();
        assert_eq!(argmax(&m.mul_vec(&basis(8, 1)).unwrap()), 5);
        // control unset: |100> stays
        assert_eq!(argmax(&m.mul_vec(&basis(8, 4)).unwrap()), 4);
    }

    #[test]
    fn cz_marks_only_both_set() {
        let m = lift_cz(0, 1, 2).unwrap();
        assert_eq!(m[(3, 3)], Complex64::new(-1.0, 0.0));
        assert_eq!(m[(1, 1)], Complex64::one());
        assert_eq!(m[(2, 2)], Complex64::one());
    }

    #[test]
    fn swap_exchanges_bits() {
        let m = lift_swap(0, 1, 2).unwrap();
        // |01> (index 1, qubit0 = 1) -> |10> (index 2)
        assert_eq!(argmax(&m.mul_vec(&basis(4, 1)).unwrap()), 2);
    }

    #[test]
    fn invalid_indices_are_dimension_errors() {
        assert_eq!(lift_single(&pauli_x(), 2, 2).unwrap_err().kind(), ErrorKind::Dimension);
        assert_eq!(lift_cnot(1, 1, 2).unwrap_err().kind(), ErrorKind::Dimension);
        assert_eq!(lift_cz(0, 5, 3).unwrap_err().kind(), ErrorKind::Dimension);
        assert_eq!(phase_flip_oracle(2, 4).unwrap_err().kind(), ErrorKind::Dimension);
        assert!(lift_single(&Matrix::identity(4), 2, 0).is_err());
    }

    #[test]
    fn phase_flip_oracle_negates_marked_index() {
        let m = phase_flip_oracle(2, 3).unwrap();
        assert_eq!(m[(3, 3)], Complex64::new(-1.0, 0.0));
        assert_eq!(m[(0, 0)], Complex64::one());
        assert!(diagonal_oracle(&[Complex64::one(); 3]).is_err());
    }
}
