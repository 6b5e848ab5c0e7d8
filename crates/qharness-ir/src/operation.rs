//! Circuit operations.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::qubit::{ClbitId, QubitId};

/// One entry in a circuit's operation sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// A gate applied to the listed qubits, in gate-defined order
    /// (control before target for controlled gates).
    Gate {
        /// The gate.
        gate: StandardGate,
        /// Qubits the gate acts on.
        qubits: Vec<QubitId>,
    },
    /// Measure one qubit into one classical bit.
    Measure {
        /// Measured qubit.
        qubit: QubitId,
        /// Destination classical bit.
        clbit: ClbitId,
    },
    /// Measure qubit `i` into classical bit `i` for every qubit.
    MeasureAll,
}

impl Operation {
    /// Create a gate operation.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Operation::Gate {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate operation.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate operation.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a measurement.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Operation::Measure { qubit, clbit }
    }

    /// Get the name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Gate { gate, .. } => gate.name(),
            Operation::Measure { .. } => "measure",
            Operation::MeasureAll => "measure_all",
        }
    }

    /// The gate, if this is a gate operation.
    pub fn as_gate(&self) -> Option<&StandardGate> {
        match self {
            Operation::Gate { gate, .. } => Some(gate),
            _ => None,
        }
    }

    /// Check if this is a gate operation.
    pub fn is_gate(&self) -> bool {
        matches!(self, Operation::Gate { .. })
    }

    /// Check if this is a measurement of any form.
    pub fn is_measure(&self) -> bool {
        matches!(self, Operation::Measure { .. } | Operation::MeasureAll)
    }

    /// Qubits touched by this operation in a circuit of `num_qubits` qubits.
    pub fn qubits(&self, num_qubits: u32) -> Vec<QubitId> {
        match self {
            Operation::Gate { qubits, .. } => qubits.clone(),
            Operation::Measure { qubit, .. } => vec![*qubit],
            Operation::MeasureAll => (0..num_qubits).map(QubitId).collect(),
        }
    }
}
