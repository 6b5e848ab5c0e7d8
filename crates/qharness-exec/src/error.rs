//! Error types for the execution dispatcher.

use qharness_compile::CompileError;
use qharness_hal::HalError;
use qharness_ir::{IrError, QubitId};
use thiserror::Error;

/// Errors that can occur while adapting or running a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecError {
    /// Shot count must be positive.
    #[error("Invalid shot count: {shots} (must be at least 1)")]
    InvalidShotCount {
        /// Requested shots.
        shots: u32,
    },

    /// Shot count exceeds the backend limit.
    #[error("Requested {shots} shots but backend allows at most {max_shots}")]
    ShotLimitExceeded {
        /// Requested shots.
        shots: u32,
        /// Backend limit.
        max_shots: u32,
    },

    /// Backend returned an outcome of the wrong width.
    #[error("Backend returned a {got}-bit outcome for a circuit with {expected} classical bits")]
    MalformedSample {
        /// Number of classical bits in the circuit.
        expected: usize,
        /// Length of the returned outcome.
        got: usize,
    },

    /// No decomposition of a gate into the backend's native gates.
    #[error(
        "Unsupported operation '{gate}' on {} for backend '{backend}'",
        format_qubits(.qubits)
    )]
    UnsupportedOperation {
        /// Gate that could not be adapted.
        gate: String,
        /// Qubits the gate acts on.
        qubits: Vec<QubitId>,
        /// Target backend.
        backend: String,
    },

    /// Backend error.
    #[error(transparent)]
    Hal(#[from] HalError),

    /// Translation error.
    #[error(transparent)]
    Compile(CompileError),

    /// Circuit error.
    #[error(transparent)]
    Ir(#[from] IrError),
}

fn format_qubits(qubits: &[QubitId]) -> String {
    let names: Vec<String> = qubits.iter().map(ToString::to_string).collect();
    names.join(", ")
}

impl ExecError {
    /// Lift a translation error, naming the target backend.
    pub(crate) fn from_compile(err: CompileError, backend: &str) -> Self {
        match err {
            CompileError::UnsupportedOperation { gate, qubits } => ExecError::UnsupportedOperation {
                gate,
                qubits,
                backend: backend.to_string(),
            },
            CompileError::Ir(e) => ExecError::Ir(e),
            other => ExecError::Compile(other),
        }
    }
}

/// Result type for execution.
pub type ExecResult<T> = Result<T, ExecError>;
