//! Basis translation.
//!
//! Rewrites every gate that is not in the target basis using a fixed
//! decomposition table. Each table entry lists candidate sequences in
//! application order; every candidate equals the original gate up to a
//! global phase. Lowering is recursive: a candidate is accepted when each
//! of its gates is native or can itself be lowered within the remaining
//! depth. The first accepted candidate wins.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use qharness_ir::{Circuit, Operation, QubitId, StandardGate};
use tracing::{debug, instrument};

use crate::basis::BasisGates;
use crate::error::{CompileError, CompileResult};

/// A gate placed on concrete qubits.
pub type Placed = (StandardGate, Vec<QubitId>);

/// Basis translation over a fixed decomposition table.
#[derive(Debug, Clone)]
pub struct BasisTranslation {
    basis: BasisGates,
    max_depth: usize,
}

impl BasisTranslation {
    /// Default number of nested decompositions tried per gate.
    pub const MAX_DEPTH: usize = 4;

    /// Create a translation targeting `basis`.
    pub fn new(basis: BasisGates) -> Self {
        Self {
            basis,
            max_depth: Self::MAX_DEPTH,
        }
    }

    /// Override the recursion bound.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The target basis.
    pub fn basis(&self) -> &BasisGates {
        &self.basis
    }

    /// Translate `circuit` into a new circuit using only basis gates.
    ///
    /// Measurements are copied unchanged. Fails with
    /// [`CompileError::UnsupportedOperation`] for the first gate that has
    /// no decomposition into the basis.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name(), basis = %self.basis))]
    pub fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        let mut out = Circuit::new(circuit.num_qubits(), circuit.num_clbits())?
            .with_name(circuit.name());
        let mut translated = 0usize;

        for op in circuit.operations() {
            let Operation::Gate { gate, qubits } = op else {
                out.append(op.clone())?;
                continue;
            };
            if self.basis.contains(gate.kind()) {
                out.append(op.clone())?;
                continue;
            }

            let lowered = self.lower(*gate, qubits, self.max_depth).ok_or_else(|| {
                CompileError::UnsupportedOperation {
                    gate: gate.to_string(),
                    qubits: qubits.clone(),
                }
            })?;
            translated += 1;
            for (g, qs) in lowered {
                out.append(Operation::gate(g, qs))?;
            }
        }

        debug!(
            "Translated {} gates: {} -> {} operations",
            translated,
            circuit.num_ops(),
            out.num_ops()
        );
        Ok(out)
    }

    /// Lower one gate, or `None` when no candidate reaches the basis.
    fn lower(&self, gate: StandardGate, qubits: &[QubitId], depth: usize) -> Option<Vec<Placed>> {
        if self.basis.contains(gate.kind()) {
            return Some(vec![(gate, qubits.to_vec())]);
        }
        if depth == 0 {
            return None;
        }

        'candidates: for candidate in decompositions(gate, qubits) {
            let mut lowered = Vec::with_capacity(candidate.len());
            for (g, qs) in candidate {
                match self.lower(g, &qs, depth - 1) {
                    Some(seq) => lowered.extend(seq),
                    None => continue 'candidates,
                }
            }
            return Some(lowered);
        }
        None
    }
}

/// Candidate decompositions of `gate` on `qubits`, in preference order.
///
/// Each candidate is a gate sequence in application order.
pub fn decompositions(gate: StandardGate, qubits: &[QubitId]) -> Vec<Vec<Placed>> {
    use StandardGate as G;

    if let [c, t] = *qubits {
        let on = |g: StandardGate, a: QubitId, b: QubitId| (g, vec![a, b]);
        let h_t = (G::H, vec![t]);
        return match gate {
            G::CX => vec![vec![h_t.clone(), on(G::CZ, c, t), h_t]],
            G::CZ => vec![vec![h_t.clone(), on(G::CX, c, t), h_t]],
            G::Swap => vec![vec![on(G::CX, c, t), on(G::CX, t, c), on(G::CX, c, t)]],
            _ => vec![],
        };
    }

    let [q] = *qubits else {
        return vec![];
    };
    let seq = |gates: &[StandardGate]| -> Vec<Placed> {
        gates.iter().map(|&g| (g, vec![q])).collect()
    };

    match gate {
        G::I => vec![vec![]],
        G::X => vec![
            seq(&[G::SX, G::SX]),
            seq(&[G::Rx(PI)]),
            seq(&[G::H, G::Z, G::H]),
        ],
        G::Y => vec![seq(&[G::Ry(PI)]), seq(&[G::X, G::Z])],
        G::Z => vec![
            seq(&[G::Rz(PI)]),
            seq(&[G::S, G::S]),
            seq(&[G::H, G::X, G::H]),
        ],
        G::H => vec![
            seq(&[G::Rz(FRAC_PI_2), G::SX, G::Rz(FRAC_PI_2)]),
            seq(&[G::Ry(FRAC_PI_2), G::X]),
        ],
        G::S => vec![seq(&[G::Rz(FRAC_PI_2)])],
        G::Sdg => vec![seq(&[G::Rz(-FRAC_PI_2)])],
        G::T => vec![seq(&[G::Rz(FRAC_PI_4)])],
        G::Tdg => vec![seq(&[G::Rz(-FRAC_PI_4)])],
        G::SX => vec![seq(&[G::Rx(FRAC_PI_2)]), seq(&[G::H, G::S, G::H])],
        G::SXdg => vec![seq(&[G::Rx(-FRAC_PI_2)]), seq(&[G::SX, G::SX, G::SX])],
        G::Rx(theta) => vec![
            seq(&[G::H, G::Rz(theta), G::H]),
            seq(&[G::Rz(FRAC_PI_2), G::Ry(theta), G::Rz(-FRAC_PI_2)]),
        ],
        G::Ry(theta) => vec![
            seq(&[G::Rz(-FRAC_PI_2), G::Rx(theta), G::Rz(FRAC_PI_2)]),
            seq(&[G::SX, G::Rz(theta), G::SXdg]),
        ],
        G::Rz(theta) => vec![
            seq(&[G::H, G::Rx(theta), G::H]),
            seq(&[G::Rx(-FRAC_PI_2), G::Ry(theta), G::Rx(FRAC_PI_2)]),
        ],
        G::CX | G::CZ | G::Swap => vec![],
    }
}
