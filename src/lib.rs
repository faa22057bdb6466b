// src/lib.rs

//! `qvis` - a dense state-vector quantum simulator
//!
//! Builds multi-qubit gate operators by tensor-product lifting, applies
//! textual or programmatic gate sequences to complex amplitude vectors,
//! samples measurements, measures bipartite entanglement and runs the
//! textbook Deutsch–Jozsa, Grover, QFT and phase-estimation pipelines.
//!
//! Qubit 0 is the least-significant bit of a basis index throughout.

pub mod core;
pub mod gates;
pub mod operations;
pub mod circuits;
pub mod program;
pub mod simulation;
pub mod analysis;
pub mod algorithms;
pub mod bloch;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{ErrorKind, Matrix, QvisError, Result, StateVector};
pub use gates::{RotationAxis, SingleQubitGate, TwoQubitGate};
pub use operations::{Operation, SpecialState};
pub use circuits::{Circuit, CircuitBuilder};
pub use program::{Interpreter, apply_sequence, parse_program, parse_token};
pub use simulation::{SimulationResult, Simulator, SimulatorConfig, ValidationMode};
pub use analysis::{entanglement_entropy, measure, probabilities, to_dirac};
pub use validation::{check_normalization, validate_state};

// Example 1: Bell pair from a text program
/// ```
/// use qvis::{apply_sequence, entanglement_entropy, probabilities, to_dirac, StateVector};
///
/// let state = apply_sequence("H0 CNOT01", &StateVector::zero(2)?, 2)?;
/// assert_eq!(to_dirac(&state, 2, 1e-4), "0.707|00⟩ + 0.707|11⟩");
///
/// let probs = probabilities(&state);
/// assert!((probs[0] - 0.5).abs() < 1e-12 && (probs[3] - 0.5).abs() < 1e-12);
/// assert!((entanglement_entropy(&state, 2, None)? - 1.0).abs() < 1e-12);
/// # Ok::<(), qvis::QvisError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Seeded measurement of a circuit built in code
/// ```
/// use qvis::{CircuitBuilder, Simulator, SimulatorConfig, StateVector};
///
/// let circuit = CircuitBuilder::new().x(0).cnot(0, 2).build();
/// let mut simulator = Simulator::with_config(SimulatorConfig::default().with_seed(7));
/// let result = simulator.run(&circuit, &StateVector::zero(3)?)?;
///
/// println!("Circuit:\n{}", circuit);
/// println!("{}", result);
///
/// // |101> is the only outcome: qubits 0 and 2 set.
/// assert_eq!(simulator.measure(result.state()), 0b101);
/// # Ok::<(), qvis::QvisError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
