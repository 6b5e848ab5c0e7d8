//! Backend capability introspection.
//!
//! This module defines the types that describe what a backend can do:
//! qubit count, natively supported gates and shot limits. The adaptation
//! step uses the native [`GateSet`] to decide which gates to decompose.

use std::collections::BTreeSet;
use std::fmt;

use qharness_ir::GateKind;
use serde::{Deserialize, Serialize};

/// Capabilities of a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Natively supported gates.
    pub gate_set: GateSet,
    /// Maximum number of shots per run.
    pub max_shots: u32,
    /// Whether this is a simulator.
    pub is_simulator: bool,
}

impl Capabilities {
    /// Create capabilities for a simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 100_000,
            is_simulator: true,
        }
    }

    /// Replace the native gate set.
    #[must_use]
    pub fn with_gate_set(mut self, gate_set: GateSet) -> Self {
        self.gate_set = gate_set;
        self
    }

    /// Replace the shot limit.
    #[must_use]
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.max_shots = max_shots;
        self
    }

    /// Check if a gate kind is natively supported.
    pub fn supports_gate(&self, kind: GateKind) -> bool {
        self.gate_set.contains(kind)
    }
}

/// Set of gate kinds a backend executes without decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateSet {
    kinds: BTreeSet<GateKind>,
}

impl GateSet {
    /// Names accepted by [`GateSet::from_profile`].
    pub const PROFILES: [&'static str; 4] = ["universal", "ibm", "heron", "neutral-atom"];

    /// Create a gate set from the given kinds.
    pub fn new(kinds: impl IntoIterator<Item = GateKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Every gate kind the circuit model knows.
    pub fn universal() -> Self {
        Self::new(GateKind::ALL)
    }

    /// IBM-style CX basis: `rz, sx, x, cx`.
    pub fn ibm() -> Self {
        Self::new([GateKind::Rz, GateKind::SX, GateKind::X, GateKind::CX])
    }

    /// IBM Heron basis: `rz, sx, x, cz`.
    pub fn heron() -> Self {
        Self::new([GateKind::Rz, GateKind::SX, GateKind::X, GateKind::CZ])
    }

    /// Neutral-atom basis: `rx, ry, rz, cz`.
    pub fn neutral_atom() -> Self {
        Self::new([GateKind::Rx, GateKind::Ry, GateKind::Rz, GateKind::CZ])
    }

    /// Look up a named profile. Underscores and case are ignored.
    pub fn from_profile(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "universal" | "simulator" => Some(Self::universal()),
            "ibm" => Some(Self::ibm()),
            "heron" => Some(Self::heron()),
            "neutral-atom" => Some(Self::neutral_atom()),
            _ => None,
        }
    }

    /// Check if `kind` is in the set.
    pub fn contains(&self, kind: GateKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Iterate over the kinds in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = GateKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Number of kinds in the set.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl FromIterator<GateKind> for GateSet {
    fn from_iter<I: IntoIterator<Item = GateKind>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for GateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(GateKind::name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
