// src/program/interpreter.rs

use super::parser::{parse_token, tokenize};
use crate::core::{Result, StateVector};
use crate::simulation::engine::{SimulationEngine, StepOutcome};
use crate::simulation::{SimulationResult, SimulatorConfig};
use log::{debug, warn};

/// Applies textual gate programs token by token.
///
/// Each token is parsed and applied before the next one is read, so a
/// failing token aborts the program with no partial state returned. A
/// `BELL`, `GHZ` or `W` token replaces the state outright and ends the
/// program: tokens before it are discarded and tokens after it are never
/// parsed. A warning is logged when such a token is not the only one.
///
/// ```
/// use qvis::{Interpreter, StateVector};
///
/// let result = Interpreter::new().run("H0 CNOT01", &StateVector::zero(2)?, 2)?;
/// assert_eq!(result.dirac(), "0.707|00⟩ + 0.707|11⟩");
/// # Ok::<(), qvis::QvisError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: SimulatorConfig,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the validation mode, tolerance and Dirac threshold of `config`.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Runs `program` on a copy of `initial`, an n-qubit state.
    ///
    /// # Errors
    /// * `Parse` for an unrecognized token.
    /// * `Dimension` if `initial` does not have `2^num_qubits` amplitudes,
    ///   a qubit index is `>= num_qubits`, or a two-qubit gate repeats a qubit.
    pub fn run(&self, program: &str, initial: &StateVector, num_qubits: usize) -> Result<SimulationResult> {
        let tokens = tokenize(program);
        debug!("interpreting {} tokens on {} qubits", tokens.len(), num_qubits);

        let mut engine = SimulationEngine::init(initial, num_qubits, &self.config)?;
        let mut applied = 0;
        let mut short_circuited_by = None;

        for token in &tokens {
            let op = parse_token(token)?;
            debug!("token '{}' parsed as {:?}", token, op);
            applied += 1;
            if let StepOutcome::Replaced(special) = engine.apply_operation(&op)? {
                if tokens.len() > 1 {
                    warn!(
                        "'{}' replaced the state; {} earlier token(s) discarded, {} later token(s) ignored",
                        token,
                        applied - 1,
                        tokens.len() - applied
                    );
                }
                short_circuited_by = Some(special);
                break;
            }
        }

        Ok(SimulationResult::new(engine.into_state(), applied, short_circuited_by)
            .with_dirac_threshold(self.config.dirac_threshold))
    }
}

/// Applies a whitespace-separated gate program to `initial` and returns the
/// final state. See [`Interpreter`] for the token-by-token semantics.
pub fn apply_sequence(program: &str, initial: &StateVector, num_qubits: usize) -> Result<StateVector> {
    Interpreter::new()
        .run(program, initial, num_qubits)
        .map(SimulationResult::into_state)
}
