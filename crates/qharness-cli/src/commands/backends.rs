//! Backends command implementation.

use anyhow::Result;
use console::style;

use qharness_adapter_sim::SimulatorBackend;
use qharness_hal::{Backend, GateSet};

/// Execute the backends command.
pub fn execute() -> Result<()> {
    println!("{} Available targets:\n", style("qharness").cyan().bold());

    // "simulator" stands in for the universal profile.
    let mut targets = vec!["simulator"];
    targets.extend_from_slice(&GateSet::PROFILES[1..]);
    for target in targets {
        let Some(gate_set) = GateSet::from_profile(target) else {
            continue;
        };
        let sim = SimulatorBackend::new().with_gate_set(gate_set);
        let caps = sim.capabilities();

        println!(
            "  {} {} {}",
            style("●").green(),
            style(target).bold(),
            if caps.is_simulator { "(local)" } else { "" }
        );
        println!("    Qubits: {}", caps.num_qubits);
        println!("    Max shots: {}", caps.max_shots);
        println!("    Gates: {}", caps.gate_set);
        println!();
    }

    Ok(())
}
