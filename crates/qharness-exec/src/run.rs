//! Repeated sampling into outcome counts.

use std::time::Instant;

use qharness_hal::{Backend, Counts, ExecutionResult};
use qharness_ir::Circuit;
use tracing::{debug, info, instrument};

use crate::adapt::{AdaptedCircuit, adapt};
use crate::error::{ExecError, ExecResult};

const PROGRESS_INTERVAL: u32 = 1000;

/// Sample an adapted circuit `shots` times and tally the outcomes.
///
/// Every key of the returned [`Counts`] has one character per classical
/// bit, and the counts sum to `shots`.
#[instrument(skip(adapted), fields(circuit = adapted.circuit().name(), backend = adapted.backend().name()))]
pub fn run(adapted: &AdaptedCircuit<'_>, shots: u32) -> ExecResult<Counts> {
    if shots == 0 {
        return Err(ExecError::InvalidShotCount { shots });
    }
    let backend = adapted.backend();
    let max_shots = backend.capabilities().max_shots;
    if shots > max_shots {
        return Err(ExecError::ShotLimitExceeded { shots, max_shots });
    }

    let circuit = adapted.circuit();
    let expected = circuit.num_clbits() as usize;
    let mut counts = Counts::new();

    for shot in 1..=shots {
        let outcome = backend.sample(circuit)?;
        if outcome.len() != expected {
            return Err(ExecError::MalformedSample {
                expected,
                got: outcome.len(),
            });
        }
        counts.record(&outcome);

        if shot % PROGRESS_INTERVAL == 0 {
            debug!("Sampled {}/{} shots", shot, shots);
        }
    }

    info!(
        "Completed {} shots with {} distinct outcomes",
        shots,
        counts.len()
    );
    Ok(counts)
}

/// Adapt `circuit` to `backend`, run it, and time the whole job.
pub fn execute(circuit: &Circuit, backend: &dyn Backend, shots: u32) -> ExecResult<ExecutionResult> {
    let start = Instant::now();
    let adapted = adapt(circuit, backend)?;
    let counts = run(&adapted, shots)?;
    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed))
}
