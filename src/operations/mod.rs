// src/operations/mod.rs

//! The closed set of operations a gate program can contain.
//!
//! Programs are parsed into `Operation` values and interpreted by matching
//! on them exhaustively; there is no string-keyed dispatch after parsing.

use crate::core::{Matrix, QvisError, Result, StateVector};
use crate::gates::{RotationAxis, SingleQubitGate, TwoQubitGate, lift_single};
use crate::validation::check_finite_angle;
use std::fmt;
use std::str::FromStr;

/// Named canonical entangled states a program can prepare outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialState {
    /// `(|0...0⟩ + |1...1⟩)/√2`, canonical for two qubits.
    Bell,
    /// Same amplitude pattern as `Bell`, generalized to n qubits.
    Ghz,
    /// Equal superposition of every single-excitation basis state.
    W,
}

impl SpecialState {
    /// Builds the named state over `num_qubits` qubits.
    pub fn prepare(&self, num_qubits: usize) -> Result<StateVector> {
        match self {
            SpecialState::Bell => StateVector::bell(num_qubits),
            SpecialState::Ghz => StateVector::ghz(num_qubits),
            SpecialState::W => StateVector::w(num_qubits),
        }
    }

    /// Program keyword (`BELL`, `GHZ`, `W`).
    pub fn keyword(&self) -> &'static str {
        match self {
            SpecialState::Bell => "BELL",
            SpecialState::Ghz => "GHZ",
            SpecialState::W => "W",
        }
    }
}

impl FromStr for SpecialState {
    type Err = QvisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BELL" => Ok(SpecialState::Bell),
            "GHZ" => Ok(SpecialState::Ghz),
            "W" => Ok(SpecialState::W),
            _ => Err(QvisError::parse(s.trim())),
        }
    }
}

/// One step of a gate program.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// A fixed single-qubit gate (`X`, `Y`, `Z`, `H`, `S`, `T`).
    Single {
        gate: SingleQubitGate,
        qubit: usize,
    },
    /// A parametric rotation; the angle is in degrees.
    Rotation {
        axis: RotationAxis,
        qubit: usize,
        degrees: f64,
    },
    /// `CNOT`, `CZ` or `SWAP`. For the controlled gates `first` is the
    /// control and `second` the target.
    TwoQubit {
        gate: TwoQubitGate,
        first: usize,
        second: usize,
    },
    /// Replaces the whole state with a canonical entangled state.
    Prepare(SpecialState),
}

impl Operation {
    /// Qubit indices named by the operation. A state directive names none.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Operation::Single { qubit, .. } | Operation::Rotation { qubit, .. } => vec![*qubit],
            Operation::TwoQubit { first, second, .. } => vec![*first, *second],
            Operation::Prepare(_) => Vec::new(),
        }
    }

    /// The `2^n × 2^n` operator for a unitary step.
    ///
    /// Returns `Ok(None)` for a state directive, which has no operator form.
    /// A rotation angle that is NaN or infinite is a `Dimension` error.
    pub fn lifted_operator(&self, num_qubits: usize) -> Result<Option<Matrix>> {
        let matrix = match self {
            Operation::Single { gate, qubit } => lift_single(&gate.matrix(), num_qubits, *qubit)?,
            Operation::Rotation { axis, qubit, degrees } => {
                check_finite_angle(*degrees, "rotation angle")?;
                lift_single(&axis.matrix(*degrees), num_qubits, *qubit)?
            }
            Operation::TwoQubit { gate, first, second } => gate.lift(*first, *second, num_qubits)?,
            Operation::Prepare(_) => return Ok(None),
        };
        Ok(Some(matrix))
    }

    /// True for `BELL`, `GHZ` and `W`.
    pub fn is_state_directive(&self) -> bool {
        matches!(self, Operation::Prepare(_))
    }
}

/// Renders the canonical program token, e.g. `H0`, `RX1(90)`, `CNOT01`, `GHZ`.
///
/// A rotation with a NaN or infinite angle renders as `RX0(NaN)` or
/// `RX0(inf)`, which does not parse back; such operations are also rejected
/// by [`Operation::lifted_operator`].
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Single { gate, qubit } => write!(f, "{}{}", gate.symbol(), qubit),
            Operation::Rotation { axis, qubit, degrees } => {
                write!(f, "{}{}({})", axis.symbol(), qubit, degrees)
            }
            Operation::TwoQubit { gate, first, second } => {
                write!(f, "{}{}{}", gate.symbol(), first, second)
            }
            Operation::Prepare(state) => f.write_str(state.keyword()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_produces_program_tokens() {
        let h = Operation::Single { gate: SingleQubitGate::H, qubit: 0 };
        let rx = Operation::Rotation { axis: RotationAxis::X, qubit: 1, degrees: 90.0 };
        let rz = Operation::Rotation { axis: RotationAxis::Z, qubit: 2, degrees: -12.5 };
        let cnot = Operation::TwoQubit { gate: TwoQubitGate::Cnot, first: 0, second: 1 };
        assert_eq!(h.to_string(), "H0");
        assert_eq!(rx.to_string(), "RX1(90)");
        assert_eq!(rz.to_string(), "RZ2(-12.5)");
        assert_eq!(cnot.to_string(), "CNOT01");
        assert_eq!(Operation::Prepare(SpecialState::Ghz).to_string(), "GHZ");
    }

    #[test]
    fn involved_qubits_per_kind() {
        let swap = Operation::TwoQubit { gate: TwoQubitGate::Swap, first: 2, second: 0 };
        assert_eq!(swap.involved_qubits(), vec![2, 0]);
        assert!(Operation::Prepare(SpecialState::W).involved_qubits().is_empty());
    }

    #[test]
    fn directive_has_no_operator() -> Result<()> {
        assert!(Operation::Prepare(SpecialState::Bell).lifted_operator(2)?.is_none());
        let x = Operation::Single { gate: SingleQubitGate::X, qubit: 1 };
        let m = x.lifted_operator(2)?.expect("unitary step");
        assert_eq!(m.dim(), 4);
        Ok(())
    }

    #[test]
    fn special_state_keywords_parse() {
        assert_eq!("bell".parse::<SpecialState>().unwrap(), SpecialState::Bell);
        assert_eq!("W".parse::<SpecialState>().unwrap(), SpecialState::W);
        assert!("BELLS".parse::<SpecialState>().is_err());
    }

    #[test]
    fn non_finite_rotation_has_no_operator() {
        for degrees in [f64::NAN, f64::INFINITY] {
            let op = Operation::Rotation { axis: RotationAxis::Y, qubit: 0, degrees };
            assert!(matches!(op.lifted_operator(1), Err(QvisError::Dimension { .. })));
        }
    }
}
