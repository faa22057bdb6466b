// src/simulation/mod.rs

//! Runs [`Circuit`]s against an explicit initial state.
//!
//! `Simulator` is the entry point: it holds a [`SimulatorConfig`] and the
//! RNG used for measurement. State evolution happens in the crate-internal
//! `SimulationEngine`, which the program interpreter shares.

mod config;
pub(crate) mod engine;
mod results;

pub use config::{SimulatorConfig, ValidationMode};
pub use results::SimulationResult;

use crate::analysis;
use crate::circuits::Circuit;
use crate::core::{Result, StateVector};
use engine::{SimulationEngine, StepOutcome};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Executes circuits and samples measurements.
///
/// The measurement RNG is created on the first [`Simulator::measure`] call,
/// so simulators that only run circuits never touch OS entropy.
pub struct Simulator {
    config: SimulatorConfig,
    rng: Option<StdRng>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::with_config(SimulatorConfig::default())
    }
}

impl Simulator {
    /// Creates a new Simulator with default settings (OS-seeded RNG, no validation).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config, rng: None }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `circuit` over `initial`, whose width sets the register size.
    ///
    /// Operations are applied strictly in order. A `BELL`/`GHZ`/`W`
    /// directive replaces the state and ends the run; any later operations
    /// are not applied.
    ///
    /// # Errors
    /// * `Dimension` if an operation names a qubit outside the register or a
    ///   two-qubit gate names the same qubit twice.
    /// * `NotNormalized` in strict validation mode if the state drifts.
    pub fn run(&self, circuit: &Circuit, initial: &StateVector) -> Result<SimulationResult> {
        let num_qubits = initial.num_qubits();
        debug!("running circuit of {} operations on {} qubits", circuit.len(), num_qubits);

        let mut engine = SimulationEngine::init(initial, num_qubits, &self.config)?;
        let mut applied = 0;
        let mut short_circuited_by = None;
        for op in circuit.operations() {
            applied += 1;
            if let StepOutcome::Replaced(special) = engine.apply_operation(op)? {
                if circuit.len() > 1 {
                    warn!(
                        "{} directive replaced the state; the other {} operation(s) in the circuit have no effect",
                        special.keyword(),
                        circuit.len() - 1
                    );
                }
                short_circuited_by = Some(special);
                break;
            }
        }

        debug!("circuit run finished after {} operations", applied);
        Ok(SimulationResult::new(engine.into_state(), applied, short_circuited_by)
            .with_dirac_threshold(self.config.dirac_threshold))
    }

    /// Samples one basis index from the state's outcome distribution.
    pub fn measure(&mut self, state: &StateVector) -> usize {
        let seed = self.config.seed;
        let rng = self.rng.get_or_insert_with(|| match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        });
        analysis::measure(state, rng)
    }

    /// Dirac rendering at the configured threshold.
    pub fn to_dirac(&self, state: &StateVector) -> String {
        analysis::to_dirac(state, state.num_qubits(), self.config.dirac_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::core::ErrorKind;
    use crate::operations::SpecialState;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    /// Asserts that two complex vectors are approximately equal component-wise.
    fn assert_complex_vec_approx_equal(actual: &[Complex64], expected: &[Complex64], context: &str) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, Context: {}",
                i, actual[i], expected[i], context
            );
        }
    }

    #[test]
    fn ghz_circuit_on_three_qubits() -> Result<()> {
        let circuit = CircuitBuilder::new().h(0).cnot(0, 1).cnot(1, 2).build();
        let result = Simulator::new().run(&circuit, &StateVector::zero(3)?)?;
        assert_complex_vec_approx_equal(
            result.state().amplitudes(),
            StateVector::ghz(3)?.amplitudes(),
            "H0 CNOT01 CNOT12 on |000>",
        );
        assert_eq!(result.applied(), 3);
        assert_eq!(result.short_circuited_by(), None);
        Ok(())
    }

    #[test]
    fn directive_stops_the_run() -> Result<()> {
        let circuit = CircuitBuilder::new().x(0).prepare(SpecialState::Bell).h(1).build();
        let result = Simulator::new().run(&circuit, &StateVector::zero(2)?)?;
        assert_eq!(result.short_circuited_by(), Some(SpecialState::Bell));
        assert_eq!(result.applied(), 2);
        assert_eq!(result.state(), &StateVector::bell(2)?);
        Ok(())
    }

    #[test]
    fn empty_circuit_returns_initial_state() -> Result<()> {
        let initial = StateVector::one(2)?;
        let result = Simulator::new().run(&Circuit::new(), &initial)?;
        assert_eq!(result.state(), &initial);
        assert_eq!(result.applied(), 0);
        Ok(())
    }

    #[test]
    fn circuit_wider_than_state_fails() -> Result<()> {
        let circuit = CircuitBuilder::new().h(2).build();
        let err = Simulator::new().run(&circuit, &StateVector::zero(2)?).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Dimension);
        Ok(())
    }

    #[test]
    fn seeded_measurement_is_reproducible() -> Result<()> {
        let plus = StateVector::from_pairs(&[(FRAC_1_SQRT_2, 0.0), (FRAC_1_SQRT_2, 0.0)])?;
        let config = SimulatorConfig::default().with_seed(42);
        let mut a = Simulator::with_config(config.clone());
        let mut b = Simulator::with_config(config);
        let first: Vec<usize> = (0..32).map(|_| a.measure(&plus)).collect();
        let second: Vec<usize> = (0..32).map(|_| b.measure(&plus)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 2));
        Ok(())
    }

    #[test]
    fn result_display_uses_dirac_form() -> Result<()> {
        let circuit = CircuitBuilder::new().x(1).build();
        let result = Simulator::new().run(&circuit, &StateVector::zero(2)?)?;
        let text = result.to_string();
        assert!(text.contains("1.000|10⟩"), "{}", text);
        assert_abs_diff_eq!(result.probabilities()[2], 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn running_circuits_leaves_rng_uncreated() -> Result<()> {
        let mut simulator = Simulator::new();
        let state = simulator.run(&CircuitBuilder::new().h(0).build(), &StateVector::zero(1)?)?.into_state();
        assert!(simulator.rng.is_none());

        simulator.measure(&state);
        assert!(simulator.rng.is_some());
        Ok(())
    }
}
