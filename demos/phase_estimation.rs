//! Example: quantum phase estimation of a phase gate, comparing exact
//! and non-representable phases.

use qvis::QvisError;
use qvis::algorithms::phase_estimation;

fn main() -> Result<(), QvisError> {
    env_logger::init();
    println!("--- qvis Example: Quantum Phase Estimation ---");

    for (counting, theta) in [(3, 0.375), (4, 0.8125), (5, 0.3), (6, 0.3)] {
        let report = phase_estimation(counting, theta)?;
        println!(
            "\nθ = {:<7} with {} counting qubits: best pattern {} (p = {:.4}), estimate {:.6}, error {:.6}",
            theta,
            report.num_counting,
            report.best_bits,
            report.best_probability,
            report.estimate,
            (report.estimate - theta).abs()
        );

        // Top three counting outcomes
        let mut ranked: Vec<(usize, f64)> = report.counting_probabilities.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        for (pattern, p) in ranked.into_iter().take(3) {
            println!("    {:0width$b}: {:.4}", pattern, p, width = report.num_counting);
        }
    }

    Ok(())
}
