// src/analysis/dirac.rs

use crate::core::StateVector;
use crate::core::constants::qvis_constants::DIRAC_PHASE_EPSILON_DEG;

/// Zero-padded bitstring for a basis index, most significant qubit first.
///
/// `basis_label(1, 3) == "001"`: qubit 0 is the rightmost character.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Renders the state as a sum of basis terms, e.g. `0.707|00⟩ + 0.707e^{i90.0°}|11⟩`.
///
/// Terms with magnitude below `threshold` are skipped. Each term is the
/// magnitude to three decimals, then `e^{i<deg>°}` when the phase exceeds
/// 0.1° in magnitude, then the ket. A state with no terms renders as `0`.
pub fn to_dirac(state: &StateVector, num_qubits: usize, threshold: f64) -> String {
    let terms: Vec<String> = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.norm() >= threshold)
        .map(|(i, c)| {
            let degrees = c.im.atan2(c.re).to_degrees();
            let mut term = format!("{:.3}", c.norm());
            if degrees.abs() > DIRAC_PHASE_EPSILON_DEG {
                term.push_str(&format!("e^{{i{:.1}°}}", degrees));
            }
            term.push_str(&format!("|{}⟩", basis_label(i, num_qubits)));
            term
        })
        .collect();

    if terms.is_empty() { "0".to_string() } else { terms.join(" + ") }
}
