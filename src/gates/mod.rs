// src/gates/mod.rs

//! Gate library: the fixed single-qubit unitaries, parametric rotations and
//! the closed set of gate kinds a program can name.
//!
//! Rotation angles are given in **degrees** and use the half-angle
//! convention, e.g. `RZ(θ) = diag(e^{-iθ/2}, e^{iθ/2})`.

pub mod lift;

pub use lift::{controlled_phase, diagonal_oracle, lift_cnot, lift_cz, lift_single, lift_swap, phase_flip_oracle};

use crate::core::constants::qvis_constants::FRAC_1_SQRT_2;
use crate::core::{Matrix, QvisError, Result};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

fn re(value: f64) -> Complex64 {
    Complex64::new(value, 0.0)
}

/// I = diag(1, 1)
pub fn identity() -> Matrix {
    Matrix::identity(2)
}

/// Pauli X (bit flip).
pub fn pauli_x() -> Matrix {
    Matrix::from_rows([
        [Complex64::zero(), Complex64::one()],
        [Complex64::one(), Complex64::zero()],
    ])
}

/// Pauli Y.
pub fn pauli_y() -> Matrix {
    Matrix::from_rows([
        [Complex64::zero(), -Complex64::i()],
        [Complex64::i(), Complex64::zero()],
    ])
}

/// Pauli Z (phase flip).
pub fn pauli_z() -> Matrix {
    Matrix::from_diagonal(&[Complex64::one(), re(-1.0)])
}

/// H = (1/√2)[[1, 1], [1, -1]]
pub fn hadamard() -> Matrix {
    Matrix::from_rows([
        [re(FRAC_1_SQRT_2), re(FRAC_1_SQRT_2)],
        [re(FRAC_1_SQRT_2), re(-FRAC_1_SQRT_2)],
    ])
}

/// S = diag(1, i)
pub fn phase_s() -> Matrix {
    Matrix::from_diagonal(&[Complex64::one(), Complex64::i()])
}

/// T = diag(1, e^{iπ/4})
pub fn phase_t() -> Matrix {
    Matrix::from_diagonal(&[Complex64::one(), Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_4)])
}

/// RX(θ) = [[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]], θ in degrees.
pub fn rx(degrees: f64) -> Matrix {
    let (s, c) = (degrees.to_radians() / 2.0).sin_cos();
    let minus_i_sin = Complex64::new(0.0, -s);
    Matrix::from_rows([[re(c), minus_i_sin], [minus_i_sin, re(c)]])
}

/// RY(θ) = [[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]], θ in degrees.
pub fn ry(degrees: f64) -> Matrix {
    let (s, c) = (degrees.to_radians() / 2.0).sin_cos();
    Matrix::from_rows([[re(c), re(-s)], [re(s), re(c)]])
}

/// RZ(θ) = diag(e^{-iθ/2}, e^{iθ/2}), θ in degrees.
pub fn rz(degrees: f64) -> Matrix {
    let half = degrees.to_radians() / 2.0;
    Matrix::from_diagonal(&[Complex64::from_polar(1.0, -half), Complex64::from_polar(1.0, half)])
}

/// The fixed single-qubit gates a program can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleQubitGate {
    X,
    Y,
    Z,
    H,
    S,
    T,
}

impl SingleQubitGate {
    /// The 2×2 unitary for this gate.
    pub fn matrix(&self) -> Matrix {
        match self {
            SingleQubitGate::X => pauli_x(),
            SingleQubitGate::Y => pauli_y(),
            SingleQubitGate::Z => pauli_z(),
            SingleQubitGate::H => hadamard(),
            SingleQubitGate::S => phase_s(),
            SingleQubitGate::T => phase_t(),
        }
    }

    /// Program/diagram symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            SingleQubitGate::X => "X",
            SingleQubitGate::Y => "Y",
            SingleQubitGate::Z => "Z",
            SingleQubitGate::H => "H",
            SingleQubitGate::S => "S",
            SingleQubitGate::T => "T",
        }
    }
}

impl FromStr for SingleQubitGate {
    type Err = QvisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "X" => Ok(SingleQubitGate::X),
            "Y" => Ok(SingleQubitGate::Y),
            "Z" => Ok(SingleQubitGate::Z),
            "H" => Ok(SingleQubitGate::H),
            "S" => Ok(SingleQubitGate::S),
            "T" => Ok(SingleQubitGate::T),
            _ => Err(QvisError::parse(s)),
        }
    }
}

impl fmt::Display for SingleQubitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Axis of a parametric rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    /// Rotation matrix for an angle in degrees.
    pub fn matrix(&self, degrees: f64) -> Matrix {
        match self {
            RotationAxis::X => rx(degrees),
            RotationAxis::Y => ry(degrees),
            RotationAxis::Z => rz(degrees),
        }
    }

    /// Program/diagram symbol (`RX`, `RY`, `RZ`).
    pub fn symbol(&self) -> &'static str {
        match self {
            RotationAxis::X => "RX",
            RotationAxis::Y => "RY",
            RotationAxis::Z => "RZ",
        }
    }
}

/// The two-qubit gates a program can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwoQubitGate {
    /// Flips the second qubit when the first is 1.
    Cnot,
    /// Phase −1 when both qubits are 1.
    Cz,
    /// Exchanges the two qubits.
    Swap,
}

impl TwoQubitGate {
    /// The full `2^n × 2^n` operator acting on `first` and `second`.
    pub fn lift(&self, first: usize, second: usize, num_qubits: usize) -> Result<Matrix> {
        match self {
            TwoQubitGate::Cnot => lift_cnot(first, second, num_qubits),
            TwoQubitGate::Cz => lift_cz(first, second, num_qubits),
            TwoQubitGate::Swap => lift_swap(first, second, num_qubits),
        }
    }

    /// Program symbol (`CNOT`, `CZ`, `SWAP`).
    pub fn symbol(&self) -> &'static str {
        match self {
            TwoQubitGate::Cnot => "CNOT",
            TwoQubitGate::Cz => "CZ",
            TwoQubitGate::Swap => "SWAP",
        }
    }
}
