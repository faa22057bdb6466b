// src/simulation/config.rs

use crate::core::constants::qvis_constants::{DEFAULT_DIRAC_THRESHOLD, DEFAULT_NORM_TOLERANCE};

/// How much checking the engine does between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// No checks between steps.
    #[default]
    Off,
    /// After every applied operation, the state must still be normalized
    /// within [`SimulatorConfig::norm_tolerance`].
    Strict,
}

/// Settings for a [`Simulator`](super::Simulator) or program
/// [`Interpreter`](crate::program::Interpreter).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Seed for the measurement RNG. `None` seeds from the operating system.
    pub seed: Option<u64>,
    pub validation: ValidationMode,
    /// Tolerance on `|Σ|c_i|² - 1|` used by strict validation.
    pub norm_tolerance: f64,
    /// Basis terms with smaller magnitude are left out of Dirac strings.
    pub dirac_threshold: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            validation: ValidationMode::Off,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            dirac_threshold: DEFAULT_DIRAC_THRESHOLD,
        }
    }
}

impl SimulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    pub fn with_dirac_threshold(mut self, threshold: f64) -> Self {
        self.dirac_threshold = threshold;
        self
    }
}
