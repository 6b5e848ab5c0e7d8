//! Circuit adaptation to a backend's native gates.

use qharness_compile::{BasisGates, BasisTranslation};
use qharness_hal::{Backend, HalError, ValidationResult};
use qharness_ir::Circuit;
use tracing::{debug, info, instrument};

use crate::error::{ExecError, ExecResult};

/// A circuit rewritten into a backend's native gates, bound to that backend.
///
/// Only [`adapt`] constructs one, so a value of this type always passes
/// [`Backend::validate`] for its backend.
pub struct AdaptedCircuit<'b> {
    circuit: Circuit,
    backend: &'b dyn Backend,
}

impl<'b> AdaptedCircuit<'b> {
    /// The adapted circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The backend the circuit was adapted for.
    pub fn backend(&self) -> &'b dyn Backend {
        self.backend
    }

    /// Take the adapted circuit, dropping the backend binding.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }
}

impl std::fmt::Debug for AdaptedCircuit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptedCircuit")
            .field("circuit", &self.circuit.name())
            .field("backend", &self.backend.name())
            .field("num_ops", &self.circuit.num_ops())
            .finish()
    }
}

/// Rewrite `circuit` so that every gate is native to `backend`.
///
/// The input circuit is not modified. Measurements are carried over
/// unchanged, so the outcome distribution of the adapted circuit matches
/// that of the input.
#[instrument(skip(circuit, backend), fields(circuit = circuit.name(), backend = backend.name()))]
pub fn adapt<'b>(circuit: &Circuit, backend: &'b dyn Backend) -> ExecResult<AdaptedCircuit<'b>> {
    let caps = backend.capabilities();
    if circuit.num_qubits() > caps.num_qubits {
        return Err(HalError::CircuitTooLarge(format!(
            "circuit has {} qubits but backend '{}' supports {}",
            circuit.num_qubits(),
            backend.name(),
            caps.num_qubits
        ))
        .into());
    }

    let basis = BasisGates::new(backend.native_gate_set().iter());
    debug!("Translating {} ops into basis {}", circuit.num_ops(), basis);

    let adapted = BasisTranslation::new(basis)
        .run(circuit)
        .map_err(|e| ExecError::from_compile(e, backend.name()))?;

    match backend.validate(&adapted) {
        ValidationResult::Valid => {}
        ValidationResult::Invalid { reasons } => {
            return Err(HalError::InvalidCircuit(reasons.join("; ")).into());
        }
        ValidationResult::RequiresTranspilation { details } => {
            return Err(HalError::InvalidCircuit(details).into());
        }
    }

    info!(
        "Adapted {} ops into {} native ops",
        circuit.num_ops(),
        adapted.num_ops()
    );
    Ok(AdaptedCircuit {
        circuit: adapted,
        backend,
    })
}
