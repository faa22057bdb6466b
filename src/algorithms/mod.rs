// src/algorithms/mod.rs

//! Single-pass algorithm drivers built on the engine.
//!
//! Each driver prepares a state, applies a fixed gate sequence and a
//! problem-specific oracle, then derives its answer from the outcome
//! probabilities. Register sizes outside a driver's supported range are
//! clamped into it with a warning.

pub mod deutsch_jozsa;
pub mod grover;
pub mod qft;
pub mod qpe;

pub use deutsch_jozsa::{DeutschJozsaReport, OracleKind, Verdict, deutsch_jozsa};
pub use grover::{GroverReport, diffusion_operator, grover, grover_iterations};
pub use qft::{QftReport, inverse_qft_matrix, qft, qft_matrix};
pub use qpe::{QpeReport, phase_estimation};

use log::warn;

/// Clamps a register size into `[min, max]`, logging when it changes.
pub(crate) fn clamp_qubits(algorithm: &str, requested: usize, min: usize, max: usize) -> usize {
    let clamped = requested.clamp(min, max);
    if clamped != requested {
        warn!("{}: qubit count {} clamped to {} (supported range {}..={})", algorithm, requested, clamped, min, max);
    }
    clamped
}

/// Index and value of the largest probability; ties go to the lowest index.
pub(crate) fn most_likely(probabilities: &[f64]) -> (usize, f64) {
    probabilities
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0), |best, (i, p)| if p > best.1 { (i, p) } else { best })
}
