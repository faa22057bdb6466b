// src/simulation/results.rs
use crate::analysis::{probabilities, to_dirac};
use crate::core::StateVector;
use crate::core::constants::qvis_constants::DEFAULT_DIRAC_THRESHOLD;
use crate::operations::SpecialState;
use std::fmt;

/// Final state of a circuit or program run, plus how the run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    state: StateVector,
    /// Operations actually processed, including a terminating directive.
    applied: usize,
    /// Set when a `BELL`/`GHZ`/`W` directive replaced the state and ended the run.
    short_circuited_by: Option<SpecialState>,
    dirac_threshold: f64,
}

impl SimulationResult {
    pub(crate) fn new(state: StateVector, applied: usize, short_circuited_by: Option<SpecialState>) -> Self {
        Self { state, applied, short_circuited_by, dirac_threshold: DEFAULT_DIRAC_THRESHOLD }
    }

    pub(crate) fn with_dirac_threshold(mut self, threshold: f64) -> Self {
        self.dirac_threshold = threshold;
        self
    }

    /// The evolved state vector.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    pub fn into_state(self) -> StateVector {
        self.state
    }

    /// Number of operations processed before the run ended.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// The directive that ended the run early, if any.
    pub fn short_circuited_by(&self) -> Option<SpecialState> {
        self.short_circuited_by
    }

    /// Outcome probabilities of the final state.
    pub fn probabilities(&self) -> Vec<f64> {
        probabilities(&self.state)
    }

    /// Dirac rendering of the final state at the configured threshold.
    pub fn dirac(&self) -> String {
        to_dirac(&self.state, self.state.num_qubits(), self.dirac_threshold)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(f, "  Operations applied: {}", self.applied)?;
        if let Some(special) = self.short_circuited_by {
            writeln!(f, "  State replaced by {} directive", special.keyword())?;
        }
        writeln!(f, "  State: {}", self.dirac())
    }
}
