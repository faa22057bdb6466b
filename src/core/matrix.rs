// src/core/matrix.rs

//! Dense square complex matrices.
//!
//! Operators on n qubits are `2^n × 2^n` matrices. They are materialized
//! densely: the engine targets a handful of qubits and favours exact,
//! inspectable operators over gate-local kernels.

use super::error::{QvisError, Result};
use super::state::StateVector;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A square complex matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    /// The `dim × dim` zero matrix.
    pub fn zeros(dim: usize) -> Self {
        Self { dim, data: vec![Complex64::zero(); dim * dim] }
    }

    /// The `dim × dim` identity.
    pub fn identity(dim: usize) -> Self {
        Self::from_diagonal(&vec![Complex64::one(); dim])
    }

    /// A diagonal matrix with one entry per basis index.
    pub fn from_diagonal(diagonal: &[Complex64]) -> Self {
        let mut m = Self::zeros(diagonal.len());
        for (i, value) in diagonal.iter().enumerate() {
            m[(i, i)] = *value;
        }
        m
    }

    /// Builds a matrix from rows. Every row must have as many entries as there are rows.
    pub fn from_rows<const N: usize>(rows: [[Complex64; N]; N]) -> Self {
        Self { dim: N, data: rows.into_iter().flatten().collect() }
    }

    /// Permutation matrix sending basis index `s` to `destination(s)`.
    ///
    /// `destination` must be a bijection on `0..dim`; each column gets a single 1.
    pub fn from_permutation(dim: usize, destination: impl Fn(usize) -> usize) -> Result<Self> {
        let mut m = Self::zeros(dim);
        for s in 0..dim {
            let d = destination(s);
            if d >= dim {
                return Err(QvisError::dimension(format!(
                    "permutation maps index {} to {}, outside dimension {}", s, d, dim
                )));
            }
            m[(d, s)] = Complex64::one();
        }
        Ok(m)
    }

    /// Builds a matrix entry by entry from `f(row, col)`.
    pub fn from_fn(dim: usize, f: impl Fn(usize, usize) -> Complex64) -> Self {
        let mut data = Vec::with_capacity(dim * dim);
        for row in 0..dim {
            for col in 0..dim {
                data.push(f(row, col));
            }
        }
        Self { dim, data }
    }

    /// Number of rows (equal to the number of columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[Complex64] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    /// Kronecker product `self ⊗ other`; `self` is the more significant factor.
    pub fn kron(&self, other: &Matrix) -> Matrix {
        let dim = self.dim * other.dim;
        let mut out = Matrix::zeros(dim);
        for i in 0..self.dim {
            for j in 0..self.dim {
                let a = self[(i, j)];
                if a.is_zero() {
                    continue;
                }
                for p in 0..other.dim {
                    for q in 0..other.dim {
                        out[(i * other.dim + p, j * other.dim + q)] = a * other[(p, q)];
                    }
                }
            }
        }
        out
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.dim != other.dim {
            return Err(QvisError::dimension(format!(
                "cannot multiply {0}x{0} by {1}x{1} matrix", self.dim, other.dim
            )));
        }
        let n = self.dim;
        Ok(Matrix::from_fn(n, |i, j| (0..n).map(|k| self[(i, k)] * other[(k, j)]).sum::<Complex64>()))
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Matrix {
        Matrix::from_fn(self.dim, |i, j| self[(j, i)].conj())
    }

    /// Multiplies by a scalar.
    pub fn scale(&self, factor: Complex64) -> Matrix {
        Matrix { dim: self.dim, data: self.data.iter().map(|c| c * factor).collect() }
    }

    /// `self · v` for a raw amplitude slice.
    pub fn mul_vec(&self, v: &[Complex64]) -> Result<Vec<Complex64>> {
        if v.len() != self.dim {
            return Err(QvisError::dimension(format!(
                "operator of dimension {} applied to vector of length {}", self.dim, v.len()
            )));
        }
        Ok((0..self.dim)
            .map(|i| self.row(i).iter().zip(v).map(|(a, b)| a * b).sum::<Complex64>())
            .collect())
    }

    /// Left-multiplies a state vector, producing the evolved state.
    pub fn apply(&self, state: &StateVector) -> Result<StateVector> {
        StateVector::from_amplitudes(self.mul_vec(state.amplitudes())?)
    }

    /// True if `U†U ≈ I` within `tolerance` on every entry.
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        match self.dagger().matmul(self) {
            Ok(product) => product.approx_eq(&Matrix::identity(self.dim), tolerance),
            Err(_) => false,
        }
    }

    /// True if the matrix equals its conjugate transpose within `tolerance`.
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        self.approx_eq(&self.dagger(), tolerance)
    }

    /// Entry-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.dim == other.dim
            && self.data.iter().zip(&other.data).all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Eigenvalues of a Hermitian matrix, sorted descending.
    ///
    /// The `d × d` Hermitian `H = A + iB` is embedded as the real symmetric
    /// `2d × 2d` matrix `[[A, -B], [B, A]]`, whose spectrum is that of `H`
    /// with every eigenvalue repeated twice. The embedding is diagonalised with
    /// Jacobi rotations and every second eigenvalue is kept.
    pub fn hermitian_eigenvalues(&self, tolerance: f64) -> Result<Vec<f64>> {
        if !self.is_hermitian(tolerance.max(1e-9)) {
            return Err(QvisError::dimension("eigenvalue routine requires a Hermitian matrix"));
        }
        let d = self.dim;
        let n = 2 * d;
        let mut a = vec![vec![0.0f64; n]; n];
        for i in 0..d {
            for j in 0..d {
                let c = self[(i, j)];
                a[i][j] = c.re;
                a[i + d][j + d] = c.re;
                a[i][j + d] = -c.im;
                a[i + d][j] = c.im;
            }
        }

        jacobi_eigenvalues(&mut a, tolerance);

        let mut doubled: Vec<f64> = (0..n).map(|i| a[i][i]).collect();
        doubled.sort_by(|x, y| y.partial_cmp(x).unwrap_or(std::cmp::Ordering::Equal));
        Ok(doubled.into_iter().step_by(2).collect())
    }
}

/// Diagonalises a real symmetric matrix in place by repeatedly zeroing its
/// largest off-diagonal element. Eigenvalues are left on the diagonal.
fn jacobi_eigenvalues(a: &mut [Vec<f64>], tolerance: f64) {
    let n = a.len();
    if n < 2 {
        return;
    }
    let max_rotations = 100 * n * n;
    for _ in 0..max_rotations {
        let mut max_val = 0.0f64;
        let (mut p, mut q) = (0, 1);
        for i in 0..n {
            for j in (i + 1)..n {
                if a[i][j].abs() > max_val {
                    max_val = a[i][j].abs();
                    p = i;
                    q = j;
                }
            }
        }
        if max_val < tolerance {
            break;
        }

        let theta = if (a[p][p] - a[q][q]).abs() < 1e-15 {
            std::f64::consts::FRAC_PI_4
        } else {
            0.5 * (2.0 * a[p][q] / (a[p][p] - a[q][q])).atan()
        };
        let (s, c) = theta.sin_cos();

        // A' = Jᵀ A J, rows first then columns.
        for j in 0..n {
            let apj = a[p][j];
            let aqj = a[q][j];
            a[p][j] = c * apj + s * aqj;
            a[q][j] = -s * apj + c * aqj;
        }
        for row in a.iter_mut() {
            let aip = row[p];
            let aiq = row[q];
            row[p] = c * aip + s * aiq;
            row[q] = -s * aip + c * aiq;
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        &self.data[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Complex64 {
        &mut self.data[row * self.dim + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            write!(f, "[")?;
            for (col, c) in self.row(row).iter().enumerate() {
                write!(f, "{}{:.4}", if col > 0 { ", " } else { "" }, c)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn kron_places_left_factor_in_high_block() {
        let x = Matrix::from_rows([[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]]);
        let id = Matrix::identity(2);
        // X ⊗ I flips the high bit: |00> -> |10>
        let m = x.kron(&id);
        let out = m.mul_vec(&[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]).unwrap();
        assert_eq!(out[2], c(1.0, 0.0));
        assert_eq!(m.dim(), 4);
    }

    #[test]
    fn dagger_conjugates_and_transposes() {
        let m = Matrix::from_rows([[c(1.0, 0.0), c(0.0, 2.0)], [c(3.0, -1.0), c(0.0, 0.0)]]);
        let d = m.dagger();
        assert_eq!(d[(0, 1)], c(3.0, 1.0));
        assert_eq!(d[(1, 0)], c(0.0, -2.0));
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let m = Matrix::identity(4);
        assert!(m.mul_vec(&[c(1.0, 0.0), c(0.0, 0.0)]).is_err());
        assert!(m.matmul(&Matrix::identity(2)).is_err());
    }

    #[test]
    fn permutation_outside_dimension_fails() {
        assert!(Matrix::from_permutation(2, |s| s + 1).is_err());
    }

    #[test]
    fn hermitian_eigenvalues_of_pauli_y() {
        let y = Matrix::from_rows([[c(0.0, 0.0), c(0.0, -1.0)], [c(0.0, 1.0), c(0.0, 0.0)]]);
        let eig = y.hermitian_eigenvalues(1e-12).unwrap();
        assert_eq!(eig.len(), 2);
        assert_abs_diff_eq!(eig[0], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(eig[1], -1.0, epsilon = 1e-9);
    }

    #[test]
    fn non_hermitian_matrix_is_rejected() {
        let m = Matrix::from_rows([[c(0.0, 0.0), c(1.0, 0.0)], [c(0.0, 0.0), c(0.0, 0.0)]]);
        assert!(m.hermitian_eigenvalues(1e-12).is_err());
    }
}
