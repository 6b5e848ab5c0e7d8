//! High-level circuit builder API.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{Index, IrError, IrResult};
use crate::gate::StandardGate;
use crate::operation::Operation;
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// An ordered sequence of [`Operation`]s over a fixed number of qubits and
/// classical bits. Every appended operation is validated against those
/// dimensions, so a `Circuit` value never holds an out-of-range index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Operations in execution order.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Create an empty circuit with `num_qubits` qubits and `num_clbits`
    /// classical bits.
    ///
    /// Fails with [`IrError::InvalidDimension`] when `num_qubits` is zero.
    pub fn new(num_qubits: u32, num_clbits: u32) -> IrResult<Self> {
        if num_qubits == 0 {
            return Err(IrError::InvalidDimension {
                num_qubits,
                num_clbits,
            });
        }
        Ok(Self {
            name: "circuit".into(),
            num_qubits,
            num_clbits,
            operations: vec![],
        })
    }

    /// Set the circuit name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append an operation after validating its indices.
    pub fn append(&mut self, operation: Operation) -> IrResult<&mut Self> {
        self.validate(&operation)?;
        self.operations.push(operation);
        Ok(self)
    }

    fn validate(&self, operation: &Operation) -> IrResult<()> {
        let op_name = || Some(operation.name().to_string());
        match operation {
            Operation::Gate { gate, qubits } => {
                let expected = gate.num_qubits();
                if qubits.len() != expected as usize {
                    return Err(IrError::QubitCountMismatch {
                        gate_name: gate.name().to_string(),
                        expected,
                        got: qubits.len() as u32,
                    });
                }
                for &qubit in qubits {
                    self.check_qubit(qubit, op_name())?;
                }
                if let [a, b] = qubits.as_slice() {
                    if a == b {
                        return Err(IrError::SelfTarget {
                            gate_name: gate.name().to_string(),
                            qubit: *a,
                        });
                    }
                }
            }
            Operation::Measure { qubit, clbit } => {
                self.check_qubit(*qubit, op_name())?;
                self.check_clbit(*clbit, op_name())?;
            }
            Operation::MeasureAll => {
                // Qubit i lands in clbit i, so the last qubit needs clbit Q-1.
                if self.num_clbits < self.num_qubits {
                    return Err(IrError::IndexOutOfRange {
                        index: Index::Clbit(ClbitId(self.num_clbits)),
                        size: self.num_clbits,
                        operation: op_name(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId, operation: Option<String>) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::IndexOutOfRange {
                index: Index::Qubit(qubit),
                size: self.num_qubits,
                operation,
            });
        }
        Ok(())
    }

    fn check_clbit(&self, clbit: ClbitId, operation: Option<String>) -> IrResult<()> {
        if clbit.0 >= self.num_clbits {
            return Err(IrError::IndexOutOfRange {
                index: Index::Clbit(clbit),
                size: self.num_clbits,
                operation,
            });
        }
        Ok(())
    }

    fn apply_1q(&mut self, gate: StandardGate, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Operation::single_qubit_gate(gate, qubit))
    }

    fn apply_2q(&mut self, gate: StandardGate, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.append(Operation::two_qubit_gate(gate, q1, q2))
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    #[doc(alias = "hadamard")]
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::H, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::X, qubit)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::Y, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::Z, qubit)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::S, qubit)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::Sdg, qubit)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::T, qubit)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::Tdg, qubit)
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::SX, qubit)
    }

    /// Apply sqrt(X)-dagger gate.
    pub fn sxdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::SXdg, qubit)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::Rx(theta), qubit)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::Ry(theta), qubit)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_1q(StandardGate::Rz(theta), qubit)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    ///
    /// Fails with [`IrError::SelfTarget`] when `control == target`.
    #[doc(alias = "controlled_not")]
    #[doc(alias = "cnot")]
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_2q(StandardGate::CX, control, target)
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_2q(StandardGate::CZ, control, target)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply_2q(StandardGate::Swap, q1, q2)
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.append(Operation::measure(qubit, clbit))
    }

    /// Measure every qubit `i` into classical bit `i`.
    ///
    /// The classical register is never grown: a circuit with fewer
    /// classical bits than qubits fails with [`IrError::IndexOutOfRange`].
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        self.append(Operation::MeasureAll)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// Operations in execution order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operations.
    pub fn num_ops(&self) -> usize {
        self.operations.len()
    }

    /// Operation counts keyed by operation name.
    pub fn count_ops(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for op in &self.operations {
            *counts.entry(op.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Get the circuit depth: the longest chain of operations sharing a
    /// qubit or classical bit.
    pub fn depth(&self) -> usize {
        let mut qubit_level = vec![0usize; self.num_qubits as usize];
        let mut clbit_level = vec![0usize; self.num_clbits as usize];
        let mut depth = 0;

        for op in &self.operations {
            let qubits: Vec<usize> = op
                .qubits(self.num_qubits)
                .into_iter()
                .map(QubitId::index)
                .collect();
            let clbits: Vec<usize> = match op {
                Operation::Measure { clbit, .. } => vec![clbit.index()],
                Operation::MeasureAll => (0..self.num_qubits as usize).collect(),
                Operation::Gate { .. } => vec![],
            };

            let level = qubits
                .iter()
                .map(|&q| qubit_level[q])
                .chain(clbits.iter().map(|&c| clbit_level[c]))
                .max()
                .unwrap_or(0)
                + 1;

            for q in qubits {
                qubit_level[q] = level;
            }
            for c in clbits {
                clbit_level[c] = level;
            }
            depth = depth.max(level);
        }

        depth
    }

    /// Render the circuit as a text diagram.
    pub fn draw(&self) -> String {
        crate::draw::draw(self)
    }

    /// Serialize the circuit to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit: H on q0, CX q0→q1, measure all.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::new(2, 2)?.with_name("bell");
        circuit
            .h(QubitId(0))?
            .cx(QubitId(0), QubitId(1))?
            .measure_all()?;
        Ok(circuit)
    }

    /// Create an `n`-qubit GHZ state circuit with per-qubit measurements.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::new(n, n)?.with_name("ghz");

        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.measure(QubitId(i), ClbitId(i))?;
        }

        Ok(circuit)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new(3, 2).unwrap();
        assert_eq!(circuit.name(), "circuit");
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.num_ops(), 0);
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_zero_qubits_rejected() {
        let err = Circuit::new(0, 2).unwrap_err();
        assert!(matches!(
            err,
            IrError::InvalidDimension {
                num_qubits: 0,
                num_clbits: 2
            }
        ));
    }

    #[test]
    fn test_zero_clbits_allowed() {
        let mut circuit = Circuit::new(1, 0).unwrap();
        circuit.h(QubitId(0)).unwrap();
        assert_eq!(circuit.num_clbits(), 0);
    }

    #[test]
    fn test_bell_state() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.name(), "bell");
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.depth(), 3); // H, CX, measure_all
        assert_eq!(
            circuit.operations(),
            &[
                Operation::single_qubit_gate(StandardGate::H, QubitId(0)),
                Operation::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1)),
                Operation::MeasureAll,
            ]
        );
    }

    #[test]
    fn test_ghz_state() {
        let circuit = Circuit::ghz(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 5);
        let counts = circuit.count_ops();
        assert_eq!(counts["h"], 1);
        assert_eq!(counts["cx"], 4);
        assert_eq!(counts["measure"], 5);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::new(2, 2).unwrap();
        let err = circuit.h(QubitId(2)).unwrap_err();
        match err {
            IrError::IndexOutOfRange {
                index,
                size,
                operation,
            } => {
                assert_eq!(index, Index::Qubit(QubitId(2)));
                assert_eq!(size, 2);
                assert_eq!(operation.as_deref(), Some("h"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_clbit_out_of_range() {
        let mut circuit = Circuit::new(2, 1).unwrap();
        let err = circuit.measure(QubitId(0), ClbitId(1)).unwrap_err();
        assert!(matches!(
            err,
            IrError::IndexOutOfRange {
                index: Index::Clbit(ClbitId(1)),
                size: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_self_target_rejected() {
        let mut circuit = Circuit::new(2, 0).unwrap();
        let err = circuit.cx(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::SelfTarget { qubit: QubitId(1), .. }));
        assert!(err.to_string().contains("cx"));
    }

    #[test]
    fn test_measure_all_needs_enough_clbits() {
        let mut circuit = Circuit::new(3, 2).unwrap();
        let err = circuit.measure_all().unwrap_err();
        assert!(matches!(
            err,
            IrError::IndexOutOfRange {
                index: Index::Clbit(ClbitId(2)),
                size: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_measure_all_with_extra_clbits() {
        let mut circuit = Circuit::new(1, 3).unwrap();
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_ops(), 1);
    }

    #[test]
    fn test_append_wrong_arity() {
        let mut circuit = Circuit::new(3, 0).unwrap();
        let err = circuit
            .append(Operation::gate(StandardGate::CX, [QubitId(0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::new(2, 2).unwrap();
        circuit
            .h(QubitId(0))
            .unwrap()
            .rz(PI / 4.0, QubitId(1))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        // H and RZ run in parallel, then CX, then the two measurements.
        assert_eq!(circuit.depth(), 3);
        assert_eq!(circuit.num_ops(), 5);
    }

    #[test]
    fn test_to_json() {
        let circuit = Circuit::bell().unwrap();
        let json = circuit.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "bell");
        assert_eq!(value["num_qubits"], 2);
        assert_eq!(value["operations"].as_array().unwrap().len(), 3);
    }
}
