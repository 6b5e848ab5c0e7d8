//! Target basis gate sets.

use std::fmt;

use qharness_ir::GateKind;

/// Native gate kinds of a translation target.
///
/// Measurements are not gates and always pass through translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasisGates {
    gates: Vec<GateKind>,
}

impl BasisGates {
    /// Create a new basis gate set. Duplicates are dropped.
    pub fn new(gates: impl IntoIterator<Item = GateKind>) -> Self {
        let mut gates: Vec<GateKind> = gates.into_iter().collect();
        gates.sort_unstable();
        gates.dedup();
        Self { gates }
    }

    /// Check if a gate kind is in the basis.
    pub fn contains(&self, kind: GateKind) -> bool {
        self.gates.binary_search(&kind).is_ok()
    }

    /// Get the basis gates, sorted.
    pub fn gates(&self) -> &[GateKind] {
        &self.gates
    }

    /// Every gate kind.
    pub fn universal() -> Self {
        Self::new(GateKind::ALL)
    }

    /// Create IBM basis gates (RZ + SX + X + CX).
    pub fn ibm() -> Self {
        Self::new([GateKind::Rz, GateKind::SX, GateKind::X, GateKind::CX])
    }

    /// Create IBM Heron basis gates (RZ + SX + X + CZ).
    pub fn heron() -> Self {
        Self::new([GateKind::Rz, GateKind::SX, GateKind::X, GateKind::CZ])
    }

    /// Create neutral-atom basis gates (RZ + RX + RY + CZ).
    pub fn neutral_atom() -> Self {
        Self::new([GateKind::Rz, GateKind::Rx, GateKind::Ry, GateKind::CZ])
    }
}

impl FromIterator<GateKind> for BasisGates {
    fn from_iter<I: IntoIterator<Item = GateKind>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for BasisGates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.gates.iter().map(|g| g.name()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
