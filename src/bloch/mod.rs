// src/bloch/mod.rs

//! Single-qubit states as points on the Bloch sphere.
//!
//! `|ψ⟩ = cos(θ/2)|0⟩ + e^{iφ} sin(θ/2)|1⟩`, with θ and φ in degrees.
//! Global phase is discarded when converting a state to angles.

use crate::core::constants::qvis_constants::ZERO_NORM_EPSILON;
use crate::core::{QvisError, Result, StateVector};
use crate::gates::SingleQubitGate;
use crate::validation::check_state_qubits;
use num_complex::Complex64;

/// Polar angle `theta` in `[0, 180]` and azimuth `phi` in `[0, 360)`, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochAngles {
    pub theta: f64,
    pub phi: f64,
}

impl BlochAngles {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Unit vector `(sinθ cosφ, sinθ sinφ, cosθ)`; |0⟩ is `+z`.
    pub fn vector(&self) -> (f64, f64, f64) {
        let (st, ct) = self.theta.to_radians().sin_cos();
        let (sp, cp) = self.phi.to_radians().sin_cos();
        (st * cp, st * sp, ct)
    }

    /// The corresponding one-qubit state.
    pub fn to_state(&self) -> StateVector {
        state_from_angles(self.theta, self.phi)
    }
}

/// The six cardinal points of the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisPreset {
    Zero,
    One,
    Plus,
    Minus,
    PlusI,
    MinusI,
}

impl BasisPreset {
    pub const ALL: [BasisPreset; 6] = [
        BasisPreset::Zero,
        BasisPreset::One,
        BasisPreset::Plus,
        BasisPreset::Minus,
        BasisPreset::PlusI,
        BasisPreset::MinusI,
    ];

    pub fn angles(&self) -> BlochAngles {
        let (theta, phi) = match self {
            BasisPreset::Zero => (0.0, 0.0),
            BasisPreset::One => (180.0, 0.0),
            BasisPreset::Plus => (90.0, 0.0),
            BasisPreset::Minus => (90.0, 180.0),
            BasisPreset::PlusI => (90.0, 90.0),
            BasisPreset::MinusI => (90.0, 270.0),
        };
        BlochAngles::new(theta, phi)
    }

    pub fn state(&self) -> StateVector {
        self.angles().to_state()
    }
}

/// `α = cos(θ/2)`, `β = sin(θ/2)·e^{iφ}` for angles in degrees.
pub fn state_from_angles(theta_deg: f64, phi_deg: f64) -> StateVector {
    let half = theta_deg.to_radians() / 2.0;
    StateVector::from_pair(
        Complex64::new(half.cos(), 0.0),
        Complex64::from_polar(half.sin(), phi_deg.to_radians()),
    )
}

/// Normalized one-qubit state from arbitrary coefficients.
///
/// # Errors
/// `Normalization` if both coefficients are zero.
pub fn state_from_coefficients(alpha: Complex64, beta: Complex64) -> Result<StateVector> {
    StateVector::from_pair(alpha, beta).normalize()
}

/// Bloch angles of a one-qubit state. `phi` is the relative phase
/// `arg β − arg α`, so a global phase does not move the point.
///
/// # Errors
/// * `Dimension` unless the state has exactly one qubit.
/// * `Normalization` if the state has zero norm.
pub fn angles_from_state(state: &StateVector) -> Result<BlochAngles> {
    check_state_qubits(state, 1)?;
    let norm = state.norm();
    if norm < ZERO_NORM_EPSILON {
        return Err(QvisError::Normalization { norm });
    }
    let amps = state.amplitudes();
    let (alpha, beta) = (amps[0], amps[1]);

    let theta = (2.0 * beta.norm().atan2(alpha.norm())).to_degrees();
    let mut phi = (beta.arg() - alpha.arg()).to_degrees().rem_euclid(360.0);
    if phi >= 360.0 {
        phi = 0.0;
    }
    Ok(BlochAngles { theta, phi })
}

/// Unentangled n-qubit state with qubit `i` at `angles[i]`.
///
/// Built as `|ψ_{n-1}⟩ ⊗ ... ⊗ |ψ_0⟩`, so `angles[0]` is the
/// least-significant qubit, matching [`crate::gates::lift_single`].
///
/// # Errors
/// `Dimension` if `angles` is empty or too long to address.
pub fn product_state(angles: &[BlochAngles]) -> Result<StateVector> {
    let (first, rest) = angles
        .split_first()
        .ok_or_else(|| QvisError::dimension("product state requires at least one qubit"))?;
    rest.iter()
        .try_fold(first.to_state(), |state, qubit| qubit.to_state().tensor(&state))
}

/// Applies a fixed gate to a one-qubit state.
pub fn apply_gate(state: &StateVector, gate: SingleQubitGate) -> Result<StateVector> {
    check_state_qubits(state, 1)?;
    gate.matrix().apply(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn presets_round_trip_through_states() -> Result<()> {
        for preset in BasisPreset::ALL {
            let expected = preset.angles();
            let angles = angles_from_state(&preset.state())?;
            assert_abs_diff_eq!(angles.theta, expected.theta, epsilon = TOL);
            if expected.theta > 0.0 && expected.theta < 180.0 {
                assert_abs_diff_eq!(angles.phi, expected.phi, epsilon = TOL);
            }
        }
        Ok(())
    }

    #[test]
    fn cartesian_axes() {
        let (x, y, z) = BasisPreset::Plus.angles().vector();
        assert_abs_diff_eq!(x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(z, 0.0, epsilon = TOL);
        let (_, y, _) = BasisPreset::PlusI.angles().vector();
        assert_abs_diff_eq!(y, 1.0, epsilon = TOL);
        let (_, _, z) = BasisPreset::One.angles().vector();
        assert_abs_diff_eq!(z, -1.0, epsilon = TOL);
    }

    #[test]
    fn hadamard_moves_zero_to_plus() -> Result<()> {
        let plus = apply_gate(&BasisPreset::Zero.state(), SingleQubitGate::H)?;
        let angles = angles_from_state(&plus)?;
        assert_abs_diff_eq!(angles.theta, 90.0, epsilon = TOL);
        assert_abs_diff_eq!(angles.phi, 0.0, epsilon = TOL);
        Ok(())
    }

    #[test]
    fn s_gate_rotates_phi_by_ninety() -> Result<()> {
        let out = apply_gate(&BasisPreset::Plus.state(), SingleQubitGate::S)?;
        assert_abs_diff_eq!(angles_from_state(&out)?.phi, 90.0, epsilon = TOL);
        Ok(())
    }

    #[test]
    fn global_phase_is_ignored() -> Result<()> {
        let state = state_from_coefficients(Complex64::new(0.0, 1.0), Complex64::new(0.0, 1.0))?;
        let angles = angles_from_state(&state)?;
        assert_abs_diff_eq!(angles.theta, 90.0, epsilon = TOL);
        assert_abs_diff_eq!(angles.phi, 0.0, epsilon = TOL);
        Ok(())
    }

    #[test]
    fn product_state_orders_qubits_low_to_high() -> Result<()> {
        let angles = [BasisPreset::One.angles(), BasisPreset::Zero.angles(), BasisPreset::Zero.angles()];
        let state = product_state(&angles)?;
        assert_eq!(state.num_qubits(), 3);
        assert_abs_diff_eq!(state.amplitudes()[0b001].norm(), 1.0, epsilon = TOL);
        assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = TOL);

        let single = product_state(&[BasisPreset::PlusI.angles()])?;
        assert_eq!(single, BasisPreset::PlusI.state());
        assert!(matches!(product_state(&[]), Err(QvisError::Dimension { .. })));
        Ok(())
    }

    #[test]
    fn invalid_inputs() {
        assert!(angles_from_state(&StateVector::zero(2).unwrap()).is_err());
        let zero = StateVector::from_pairs(&[(0.0, 0.0), (0.0, 0.0)]).unwrap();
        assert!(matches!(angles_from_state(&zero), Err(QvisError::Normalization { .. })));
        assert!(state_from_coefficients(Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)).is_err());
        assert!(apply_gate(&StateVector::zero(2).unwrap(), SingleQubitGate::X).is_err());
    }
}
