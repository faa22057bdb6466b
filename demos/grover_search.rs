//! Example: Grover search for every marked item on a 3-qubit register.

use qvis::QvisError;
use qvis::algorithms::{grover, grover_iterations};
use qvis::analysis::to_dirac;

fn main() -> Result<(), QvisError> {
    env_logger::init();
    println!("--- qvis Example: Grover Search ---");

    let num_qubits = 3;
    println!(
        "\nSearch space: {} items, {} Grover iterations",
        1 << num_qubits,
        grover_iterations(num_qubits)
    );

    for target in 0..(1 << num_qubits) {
        let report = grover(num_qubits, target)?;
        let status = if report.best_index == target { "found" } else { "MISSED" };
        println!(
            "  target {:0width$b} -> best {:0width$b} (p = {:.4}) {}",
            target,
            report.best_index,
            report.best_probability,
            status,
            width = num_qubits
        );
    }

    // Full state for one target, small amplitudes hidden
    let report = grover(num_qubits, 5)?;
    println!("\nFinal state for target 101:\n  {}", to_dirac(&report.state, num_qubits, 0.05));

    Ok(())
}
