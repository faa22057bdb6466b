// tests/algorithm_tests.rs

use qvis::algorithms::{
    OracleKind, Verdict, deutsch_jozsa, grover, grover_iterations, phase_estimation, qft, qft_matrix,
};
use qvis::analysis::probabilities;
use qvis::analysis::exact_entanglement_entropy;
use qvis::bloch::{BasisPreset, BlochAngles, angles_from_state, apply_gate, product_state};
use qvis::{ErrorKind, QvisError, SingleQubitGate, StateVector, apply_sequence, entanglement_entropy};

use approx::assert_abs_diff_eq;

#[test]
fn test_grover_three_qubits_finds_five() -> Result<(), QvisError> {
    let report = grover(3, 5)?;
    assert_eq!(report.iterations, 2);
    assert_eq!(report.iterations, grover_iterations(3));
    assert_eq!(report.best_index, 5);
    assert!(report.best_probability > 0.9, "probability was {}", report.best_probability);
    Ok(())
}

#[test]
fn test_grover_every_target_on_four_qubits() -> Result<(), QvisError> {
    for target in 0..16 {
        let report = grover(4, target)?;
        assert_eq!(report.best_index, target);
        assert!(report.best_probability > 0.9);
    }
    Ok(())
}

#[test]
fn test_qft_of_zero_is_flat() -> Result<(), QvisError> {
    let report = qft(2, 0)?;
    for amp in report.state.amplitudes() {
        assert_abs_diff_eq!(amp.norm(), 0.5, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_qft_of_any_basis_state_has_uniform_magnitudes() -> Result<(), QvisError> {
    for k in 0..8 {
        let report = qft(3, k)?;
        let probs = probabilities(&report.state);
        for p in probs {
            assert_abs_diff_eq!(p, 0.125, epsilon = 1e-12);
        }
    }
    assert!(qft_matrix(3)?.is_unitary(1e-10));
    Ok(())
}

#[test]
fn test_qft_rejects_out_of_range_input() {
    assert_eq!(qft(3, 8).unwrap_err().kind(), ErrorKind::Dimension);
}

#[test]
fn test_deutsch_jozsa_constant_zero_for_every_size() -> Result<(), QvisError> {
    for n in 1..=5 {
        let report = deutsch_jozsa(n, OracleKind::Constant0)?;
        assert!(report.prob_all_zero > 0.99);
        assert_eq!(report.verdict, Verdict::Constant);
    }
    Ok(())
}

#[test]
fn test_deutsch_jozsa_parity_is_balanced_for_every_size() -> Result<(), QvisError> {
    for n in 1..=5 {
        let report = deutsch_jozsa(n, OracleKind::Parity)?;
        assert!(report.prob_all_zero <= 0.01);
        assert_eq!(report.verdict, Verdict::Balanced);
    }
    Ok(())
}

#[test]
fn test_deutsch_jozsa_oracle_names() -> Result<(), QvisError> {
    let oracle: OracleKind = "constant1".parse()?;
    assert_eq!(deutsch_jozsa(2, oracle)?.verdict, Verdict::Constant);
    let err = "random".parse::<OracleKind>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    Ok(())
}

#[test]
fn test_phase_estimation_exact_and_approximate() -> Result<(), QvisError> {
    let exact = phase_estimation(3, 0.375)?;
    assert_eq!(exact.best_pattern, 3);
    assert_eq!(exact.best_bits, "011");
    assert_abs_diff_eq!(exact.best_probability, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(exact.counting_probabilities.iter().sum::<f64>(), 1.0, epsilon = 1e-9);

    // 0.3 is not a multiple of 1/64: the best estimate is the nearest grid point.
    let approx = phase_estimation(6, 0.3)?;
    assert_eq!(approx.best_pattern, 19);
    assert_abs_diff_eq!(approx.estimate, 19.0 / 64.0, epsilon = 1e-12);
    assert!(approx.best_probability > 0.4);
    Ok(())
}

#[test]
fn test_phase_estimation_is_periodic_in_theta() -> Result<(), QvisError> {
    let a = phase_estimation(4, 0.125)?;
    let b = phase_estimation(4, 1.125)?;
    assert_eq!(a.best_pattern, b.best_pattern);
    assert_eq!(phase_estimation(0, 0.5)?.num_counting, 1);
    Ok(())
}

#[test]
fn test_bloch_gates_walk_the_presets() -> Result<(), QvisError> {
    // X: |0> -> |1>, H: |1> -> |->, S: |-> -> |-i>
    let one = apply_gate(&BasisPreset::Zero.state(), SingleQubitGate::X)?;
    assert_abs_diff_eq!(angles_from_state(&one)?.theta, 180.0, epsilon = 1e-9);
    let minus = apply_gate(&one, SingleQubitGate::H)?;
    let angles = angles_from_state(&minus)?;
    assert_abs_diff_eq!(angles.theta, 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(angles.phi, 180.0, epsilon = 1e-9);
    let minus_i = apply_gate(&minus, SingleQubitGate::S)?;
    assert_abs_diff_eq!(angles_from_state(&minus_i)?.phi, 270.0, epsilon = 1e-9);
    assert!(angles_from_state(&StateVector::zero(3)?).is_err());
    Ok(())
}

#[test]
fn test_product_state_matches_gate_program() -> Result<(), QvisError> {
    // Qubit 0 in |+>, qubit 1 in |0>: the same state H0 prepares from |00>
    let product = product_state(&[BasisPreset::Plus.angles(), BasisPreset::Zero.angles()])?;
    let prepared = apply_sequence("H0", &StateVector::zero(2)?, 2)?;
    for (a, b) in product.amplitudes().iter().zip(prepared.amplitudes()) {
        assert_abs_diff_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_product_state_has_no_entanglement_at_any_cut() -> Result<(), QvisError> {
    let angles = [
        BlochAngles::new(37.0, 15.0),
        BasisPreset::Minus.angles(),
        BlochAngles::new(120.0, 300.0),
        BasisPreset::PlusI.angles(),
    ];
    let state = product_state(&angles)?;
    for split in 0..=angles.len() {
        assert_abs_diff_eq!(exact_entanglement_entropy(&state, 4, Some(split))?, 0.0, epsilon = 1e-9);
    }
    // Basis-aligned qubits also give a zero diagonal entropy.
    let basis_product = product_state(&[BasisPreset::One.angles(), BasisPreset::Zero.angles(), BasisPreset::One.angles()])?;
    for split in 0..=3 {
        assert_abs_diff_eq!(entanglement_entropy(&basis_product, 3, Some(split))?, 0.0, epsilon = 1e-12);
    }
    Ok(())
}
