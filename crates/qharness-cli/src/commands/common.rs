//! Shared helpers for CLI commands.

use anyhow::Result;
use console::style;

use qharness_adapter_sim::SimulatorBackend;
use qharness_hal::{ExecutionResult, GateSet};
use qharness_ir::{Circuit, ClbitId, QubitId};

/// Demo circuits the CLI can build.
pub const CIRCUITS: [&str; 3] = ["bell", "ghz", "idle"];

/// Build a named demo circuit.
pub fn build_circuit(name: &str, qubits: u32) -> Result<Circuit> {
    let circuit = match name.trim().to_lowercase().as_str() {
        "bell" => Circuit::bell()?,
        "ghz" => Circuit::ghz(qubits)?,
        "idle" => {
            let mut circuit = Circuit::new(1, 1)?.with_name("idle");
            circuit.measure(QubitId(0), ClbitId(0))?;
            circuit
        }
        other => {
            anyhow::bail!(
                "Unknown circuit: '{other}'. Available: {}",
                CIRCUITS.join(", ")
            );
        }
    };
    Ok(circuit)
}

/// Create a simulator restricted to the named gate profile.
pub fn build_backend(target: &str, seed: Option<u64>) -> Result<SimulatorBackend> {
    let Some(gate_set) = GateSet::from_profile(target) else {
        anyhow::bail!(
            "Unknown target: '{target}'. Available: simulator, {}",
            GateSet::PROFILES[1..].join(", ")
        );
    };

    let backend = SimulatorBackend::new().with_gate_set(gate_set);
    Ok(match seed {
        Some(seed) => backend.with_seed(seed),
        None => backend,
    })
}

/// Print execution results in a table format.
pub fn print_results(result: &ExecutionResult) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let sorted = result.counts.sorted();
    let total = result.counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(16) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }

    if let Some(time_ms) = result.execution_time_ms {
        println!("\n  Execution time: {} ms", style(time_ms).yellow());
    }
}
