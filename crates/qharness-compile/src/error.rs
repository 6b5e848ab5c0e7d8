//! Error types for the compile crate.

use qharness_ir::QubitId;
use thiserror::Error;

/// Errors that can occur during basis translation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] qharness_ir::IrError),

    /// No decomposition reaches the target basis.
    #[error("Unsupported operation '{gate}' on {}: no decomposition into the target basis", format_qubits(.qubits))]
    UnsupportedOperation {
        /// Gate that could not be lowered, with parameters.
        gate: String,
        /// Qubits the gate acts on.
        qubits: Vec<QubitId>,
    },
}

fn format_qubits(qubits: &[QubitId]) -> String {
    let names: Vec<String> = qubits.iter().map(ToString::to_string).collect();
    names.join(", ")
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
