//! Numeric constants shared by the engine.

/// Tolerances and thresholds used across the simulation.
pub mod qvis_constants {
    /// 1/√2, the amplitude scale of the Hadamard gate and Bell/GHZ states.
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    /// Used for phase angles (`e^(iθ)`)
    pub const PI: f64 = std::f64::consts::PI;
    /// Norms below this cannot be normalized; amplitudes below it count as zero.
    pub const ZERO_NORM_EPSILON: f64 = 1e-10;
    /// Default tolerance when checking that `Σ|c_i|² ≈ 1`.
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
    /// Default magnitude below which basis terms are left out of Dirac strings.
    pub const DEFAULT_DIRAC_THRESHOLD: f64 = 1e-4;
    /// Phases (in degrees) at or below this magnitude are not printed in Dirac strings.
    pub const DIRAC_PHASE_EPSILON_DEG: f64 = 0.1;
    /// Probabilities at or below this are skipped in entropy sums.
    pub const ENTROPY_EPSILON: f64 = 1e-10;
}
