//! Run command implementation.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use qharness_exec::adapt;
use qharness_hal::Backend;

use super::common::{build_backend, build_circuit, print_results};

/// Arguments of the run command.
pub struct RunArgs<'a> {
    pub circuit: &'a str,
    pub qubits: u32,
    pub shots: u32,
    pub seed: Option<u64>,
    pub target: &'a str,
    pub format: &'a str,
    pub draw: bool,
}

/// Execute the run command.
pub fn execute(args: &RunArgs<'_>) -> Result<()> {
    let json = match args.format {
        "table" => false,
        "json" => true,
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    };

    let circuit = build_circuit(args.circuit, args.qubits)?;
    let backend = build_backend(args.target, args.seed)?;
    debug!("Backend '{}' with seed {:?}", backend.name(), backend.seed());

    if !json {
        println!(
            "{} Running {} on {} ({} shots)",
            style("→").cyan().bold(),
            style(circuit.name()).green(),
            style(args.target).yellow(),
            args.shots
        );
        println!(
            "  Circuit: {} qubits, {} clbits, depth {}",
            circuit.num_qubits(),
            circuit.num_clbits(),
            circuit.depth()
        );
        println!("\n{circuit}\n");

        if args.draw {
            let adapted = adapt(&circuit, &backend)?;
            println!(
                "  Adapted for {}: {} ops\n\n{}\n",
                backend.native_gate_set(),
                adapted.circuit().num_ops(),
                adapted.circuit()
            );
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Sampling {} shots...", args.shots));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = qharness_exec::execute(&circuit, &backend, args.shots);
    spinner.finish_and_clear();
    let result = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Results: {}", result.counts);
        print_results(&result);
    }

    Ok(())
}
