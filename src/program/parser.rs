// src/program/parser.rs

//! Text grammar for gate programs.
//!
//! Tokens are separated by whitespace and matched case-insensitively, in
//! this order:
//!
//! | Form | Example | Meaning |
//! |---|---|---|
//! | `R[XYZ]<q>(<deg>)` | `RX1(90)` | rotation of qubit `q` by `deg` degrees |
//! | `BELL`, `GHZ`, `W` | `GHZ` | replace the state with a canonical state |
//! | `(CNOT\|CZ\|SWAP)<d><d>` | `CNOT01` | two-qubit gate, one digit per qubit |
//! | `[XYZHST]<q>` | `H0` | fixed single-qubit gate |

use crate::circuits::Circuit;
use crate::core::{QvisError, Result};
use crate::gates::{RotationAxis, SingleQubitGate, TwoQubitGate};
use crate::operations::{Operation, SpecialState};

fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `R[XYZ]\d+\([-\d.]+\)`
fn parse_rotation(upper: &str) -> Option<Operation> {
    let rest = upper.strip_prefix('R')?;
    let axis = match rest.chars().next()? {
        'X' => RotationAxis::X,
        'Y' => RotationAxis::Y,
        'Z' => RotationAxis::Z,
        _ => return None,
    };
    let (qubit, angle) = rest[1..].strip_suffix(')')?.split_once('(')?;
    let qubit = parse_index(qubit)?;
    if angle.is_empty() || !angle.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '.') {
        return None;
    }
    let degrees: f64 = angle.parse().ok()?;
    Some(Operation::Rotation { axis, qubit, degrees })
}

/// `(CNOT|CZ|SWAP)\d\d`
fn parse_two_qubit(upper: &str) -> Option<Operation> {
    let (gate, digits) = [
        ("CNOT", TwoQubitGate::Cnot),
        ("CZ", TwoQubitGate::Cz),
        ("SWAP", TwoQubitGate::Swap),
    ]
    .into_iter()
    .find_map(|(name, gate)| upper.strip_prefix(name).map(|digits| (gate, digits)))?;

    let mut chars = digits.chars();
    let first = chars.next()?.to_digit(10)? as usize;
    let second = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() {
        return None;
    }
    Some(Operation::TwoQubit { gate, first, second })
}

/// `[XYZHST]\d+`
fn parse_single(upper: &str) -> Option<Operation> {
    let symbol = upper.get(..1)?;
    let gate: SingleQubitGate = symbol.parse().ok()?;
    let qubit = parse_index(&upper[1..])?;
    Some(Operation::Single { gate, qubit })
}

/// Parses one program token.
///
/// # Errors
/// [`QvisError::Parse`] naming the token when it matches no gate form.
pub fn parse_token(token: &str) -> Result<Operation> {
    let trimmed = token.trim();
    let upper = trimmed.to_ascii_uppercase();

    parse_rotation(&upper)
        .or_else(|| upper.parse::<SpecialState>().ok().map(Operation::Prepare))
        .or_else(|| parse_two_qubit(&upper))
        .or_else(|| parse_single(&upper))
        .ok_or_else(|| QvisError::parse(trimmed))
}

/// Splits a program on whitespace, dropping empty pieces.
pub fn tokenize(program: &str) -> Vec<&str> {
    program.split_whitespace().collect()
}

/// Parses a whole program into a [`Circuit`].
///
/// Every token is checked, including any that follow a state directive.
/// Qubit indices are not range-checked here; that happens when the
/// circuit is run against a register of known width.
pub fn parse_program(program: &str) -> Result<Circuit> {
    tokenize(program).into_iter().map(parse_token).collect()
}
