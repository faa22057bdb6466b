// src/simulation/engine.rs
use crate::core::{Matrix, Result, StateVector};
use crate::operations::{Operation, SpecialState};
use crate::simulation::config::{SimulatorConfig, ValidationMode};
use crate::validation::{check_normalization, check_state_qubits};
use log::trace;

/// What happened when the engine processed one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    /// A unitary was applied to the current state.
    Applied,
    /// The state was replaced by a canonical state; callers stop here.
    Replaced(SpecialState),
}

/// Owns one evolving state vector and applies lifted operators to it.
pub(crate) struct SimulationEngine {
    state: StateVector,
    num_qubits: usize,
    validation: ValidationMode,
    norm_tolerance: f64,
}

impl SimulationEngine {
    /// Starts from a copy of `initial`, which must span `num_qubits` qubits.
    pub(crate) fn init(initial: &StateVector, num_qubits: usize, config: &SimulatorConfig) -> Result<Self> {
        check_state_qubits(initial, num_qubits)?;
        Ok(Self {
            state: initial.clone(),
            num_qubits,
            validation: config.validation,
            norm_tolerance: config.norm_tolerance,
        })
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    pub(crate) fn into_state(self) -> StateVector {
        self.state
    }

    /// Applies one operation. A state directive replaces the state outright.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<StepOutcome> {
        if let Operation::Prepare(special) = op {
            trace!("replacing state with {} over {} qubits", special.keyword(), self.num_qubits);
            self.state = special.prepare(self.num_qubits)?;
            self.validate()?;
            return Ok(StepOutcome::Replaced(*special));
        }
        if let Some(operator) = op.lifted_operator(self.num_qubits)? {
            trace!("applying {} as {}x{} operator on qubits {:?}", op, operator.dim(), operator.dim(), op.involved_qubits());
            self.apply_matrix(&operator)?;
        }
        Ok(StepOutcome::Applied)
    }

    /// Left-multiplies the state by a full `2^n × 2^n` operator.
    pub(crate) fn apply_matrix(&mut self, operator: &Matrix) -> Result<()> {
        let evolved = operator.mul_vec(self.state.amplitudes())?;
        self.state.amplitudes_mut().copy_from_slice(&evolved);
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        match self.validation {
            ValidationMode::Off => Ok(()),
            ValidationMode::Strict => check_normalization(&self.state, Some(self.norm_tolerance)),
        }
    }
}
