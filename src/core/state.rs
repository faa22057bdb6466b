// src/core/state.rs

use super::constants::qvis_constants::{FRAC_1_SQRT_2, ZERO_NORM_EPSILON};
use super::error::{QvisError, Result};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// Returns `2^n`, failing if it does not fit in `usize`.
pub(crate) fn dimension_for(num_qubits: usize) -> Result<usize> {
    u32::try_from(num_qubits)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .ok_or_else(|| QvisError::dimension(format!(
            "{} qubits overflow the addressable state dimension", num_qubits
        )))
}

/// A dense vector of `2^n` complex amplitudes.
///
/// Index `i` is read as an n-bit string where bit `b` (`(i >> b) & 1`) is the
/// value of qubit `b`; qubit 0 is the least-significant bit.
///
/// The vector is normally normalized (`Σ|c_i|² ≈ 1`), but intermediate
/// constructions may hold unnormalized amplitudes until [`StateVector::normalize`]
/// is called.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl StateVector {
    /// Wraps an explicit amplitude list without normalizing it.
    ///
    /// The length must be a non-zero power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        let len = amplitudes.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(QvisError::dimension(format!(
                "state vector length {} is not a power of two", len
            )));
        }
        let num_qubits = len.trailing_zeros() as usize;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Builds a state from `(re, im)` pairs without normalizing it.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::from_amplitudes(pairs.iter().map(|&(re, im)| Complex64::new(re, im)).collect())
    }

    /// One-qubit state `α|0⟩ + β|1⟩`, not normalized.
    pub fn from_pair(alpha: Complex64, beta: Complex64) -> Self {
        Self { amplitudes: vec![alpha, beta], num_qubits: 1 }
    }

    /// Custom state: the amplitude list followed by explicit normalization.
    pub fn custom(amplitudes: Vec<Complex64>) -> Result<Self> {
        Self::from_amplitudes(amplitudes)?.normalize()
    }

    /// The computational basis state `|index⟩` over `num_qubits` qubits.
    pub fn basis(num_qubits: usize, index: usize) -> Result<Self> {
        let dim = dimension_for(num_qubits)?;
        if index >= dim {
            return Err(QvisError::dimension(format!(
                "basis index {} out of range for {} qubits (dimension {})", index, num_qubits, dim
            )));
        }
        let mut amplitudes = vec![Complex64::zero(); dim];
        amplitudes[index] = Complex64::one();
        Ok(Self { amplitudes, num_qubits })
    }

    /// `|0...0⟩`: amplitude 1 at index 0.
    pub fn zero(num_qubits: usize) -> Result<Self> {
        Self::basis(num_qubits, 0)
    }

    /// `|1...1⟩`: amplitude 1 at index `2^n - 1`.
    pub fn one(num_qubits: usize) -> Result<Self> {
        let dim = dimension_for(num_qubits)?;
        Self::basis(num_qubits, dim - 1)
    }

    /// `(|0...0⟩ + |1...1⟩)/√2`. Canonical for two qubits, but defined for any n.
    pub fn bell(num_qubits: usize) -> Result<Self> {
        let dim = dimension_for(num_qubits)?;
        let mut amplitudes = vec![Complex64::zero(); dim];
        // For n = 0 both ends coincide; the single amplitude stays 1/√2 as written.
        amplitudes[0] = Complex64::new(FRAC_1_SQRT_2, 0.0);
        amplitudes[dim - 1] = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Ok(Self { amplitudes, num_qubits })
    }

    /// GHZ state, the n-qubit generalisation of [`StateVector::bell`].
    pub fn ghz(num_qubits: usize) -> Result<Self> {
        Self::bell(num_qubits)
    }

    /// W state: amplitude `1/√n` on every basis index with exactly one bit set.
    pub fn w(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QvisError::dimension("W state requires at least one qubit"));
        }
        let dim = dimension_for(num_qubits)?;
        let value = Complex64::new(1.0 / (num_qubits as f64).sqrt(), 0.0);
        let mut amplitudes = vec![Complex64::zero(); dim];
        for qubit in 0..num_qubits {
            amplitudes[1 << qubit] = value;
        }
        Ok(Self { amplitudes, num_qubits })
    }

    /// Kronecker product `self ⊗ other`.
    ///
    /// `self` becomes the high factor: `other`'s qubits keep their indices and
    /// `self`'s qubits move up by `other.num_qubits()`. Amplitudes are not
    /// renormalized.
    pub fn tensor(&self, other: &StateVector) -> Result<Self> {
        let num_qubits = self.num_qubits + other.num_qubits;
        let dim = dimension_for(num_qubits)?;
        let mut amplitudes = Vec::with_capacity(dim);
        for high in &self.amplitudes {
            amplitudes.extend(other.amplitudes.iter().map(|low| high * low));
        }
        Ok(Self { amplitudes, num_qubits })
    }

    /// Returns a copy divided by `sqrt(Σ|c_i|²)`.
    ///
    /// # Errors
    /// [`QvisError::Normalization`] if the norm is below `1e-10`.
    pub fn normalize(&self) -> Result<Self> {
        let norm = self.norm();
        if norm < ZERO_NORM_EPSILON {
            return Err(QvisError::Normalization { norm });
        }
        Ok(Self {
            amplitudes: self.amplitudes.iter().map(|c| c / norm).collect(),
            num_qubits: self.num_qubits,
        })
    }

    /// Euclidean norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Mutable access for code that owns the buffer.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Amplitude at a basis index, if in range.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Consumes the state, returning its amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// The amplitudes as `(re, im)` pairs.
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.amplitudes.iter().map(|c| (c.re, c.im)).collect()
    }

    /// Number of qubits n (the vector has `2^n` entries).
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes, `2^n`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }
}

impl TryFrom<Vec<Complex64>> for StateVector {
    type Error = QvisError;

    fn try_from(amplitudes: Vec<Complex64>) -> Result<Self> {
        Self::from_amplitudes(amplitudes)
    }
}

impl From<StateVector> for Vec<Complex64> {
    fn from(state: StateVector) -> Self {
        state.into_amplitudes()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
