//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Circuit dimensions are not usable.
    #[error("Invalid circuit dimension: {num_qubits} qubits, {num_clbits} classical bits")]
    InvalidDimension {
        /// Requested number of qubits.
        num_qubits: u32,
        /// Requested number of classical bits.
        num_clbits: u32,
    },

    /// A qubit or classical bit index lies outside the declared register.
    #[error("{index} out of range (size {size}){}", format_op_context(.operation))]
    IndexOutOfRange {
        /// The offending index.
        index: Index,
        /// Size of the register the index refers to.
        size: u32,
        /// Name of the operation being appended.
        operation: Option<String>,
    },

    /// A two-qubit gate was given the same qubit twice.
    #[error("Gate '{gate_name}' cannot target {qubit} with itself")]
    SelfTarget {
        /// Name of the gate.
        gate_name: String,
        /// The repeated qubit.
        qubit: QubitId,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Which register an out-of-range index points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    /// A qubit index.
    Qubit(QubitId),
    /// A classical bit index.
    Clbit(ClbitId),
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Index::Qubit(q) => write!(f, "Qubit {q}"),
            Index::Clbit(c) => write!(f, "Classical bit {c}"),
        }
    }
}

#[allow(clippy::ref_option)]
fn format_op_context(operation: &Option<String>) -> String {
    match operation {
        Some(name) => format!(" (operation: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
