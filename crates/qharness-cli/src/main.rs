//! qharness command-line interface.
//!
//! Builds a small demo circuit, adapts it to a simulated target and prints
//! the outcome counts.
//!
//! ```text
//! $ qharness run --circuit bell --shots 1024 --seed 7 --target heron
//! → Running bell on heron (1024 shots)
//!   Circuit: 2 qubits, 2 clbits, depth 3
//!
//! q0: [H]──●──[M:c0]──
//! q1: ─────⊕──[M:c1]──
//!
//! Results: {"00": 517, "11": 507}
//!
//! ✓ Results (1024 shots):
//!   00:    517 (50.49%) █████████████████████████
//!   11:    507 (49.51%) █████████████████████████
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, run};

/// qharness - build, adapt and sample small quantum circuits
#[derive(Parser)]
#[command(name = "qharness")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demo circuit on the simulator
    Run {
        /// Demo circuit (bell, ghz, idle)
        #[arg(short, long, default_value = "bell")]
        circuit: String,

        /// Number of qubits for the ghz circuit
        #[arg(short, long, default_value = "3")]
        qubits: u32,

        /// Number of shots
        #[arg(short, long, default_value = "1024", env = "QHARNESS_SHOTS")]
        shots: u32,

        /// RNG seed for reproducible counts
        #[arg(long, env = "QHARNESS_SEED")]
        seed: Option<u64>,

        /// Native gate profile (simulator, ibm, heron, neutral-atom)
        #[arg(short, long, default_value = "simulator", env = "QHARNESS_TARGET")]
        target: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        format: String,

        /// Also print the circuit after adaptation
        #[arg(long)]
        draw: bool,
    },

    /// List simulator targets
    Backends,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run {
            circuit,
            qubits,
            shots,
            seed,
            target,
            format,
            draw,
        } => run::execute(&run::RunArgs {
            circuit: &circuit,
            qubits,
            shots,
            seed,
            target: &target,
            format: &format,
            draw,
        }),

        Commands::Backends => backends::execute(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
