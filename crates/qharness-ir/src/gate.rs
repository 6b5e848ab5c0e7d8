//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameter-free gate tag.
///
/// Backends describe their native gate set as a set of kinds; the
/// adaptation step compares each [`StandardGate`] against it by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    /// Identity.
    Id,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Hadamard.
    H,
    /// S (sqrt(Z)).
    S,
    /// S-dagger.
    Sdg,
    /// T (fourth root of Z).
    T,
    /// T-dagger.
    Tdg,
    /// sqrt(X).
    SX,
    /// sqrt(X)-dagger.
    SXdg,
    /// Rotation around X.
    Rx,
    /// Rotation around Y.
    Ry,
    /// Rotation around Z.
    Rz,
    /// Controlled-X (CNOT).
    CX,
    /// Controlled-Z.
    CZ,
    /// SWAP.
    Swap,
}

impl GateKind {
    /// Every gate kind, single-qubit kinds first.
    pub const ALL: [GateKind; 17] = [
        GateKind::Id,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::H,
        GateKind::S,
        GateKind::Sdg,
        GateKind::T,
        GateKind::Tdg,
        GateKind::SX,
        GateKind::SXdg,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::CX,
        GateKind::CZ,
        GateKind::Swap,
    ];

    /// OpenQASM 3 name of this kind.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::Id => "id",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::H => "h",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::SX => "sx",
            GateKind::SXdg => "sxdg",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
            GateKind::CX => "cx",
            GateKind::CZ => "cz",
            GateKind::Swap => "swap",
        }
    }

    /// Number of qubits a gate of this kind acts on.
    #[inline]
    pub fn num_qubits(self) -> u32 {
        match self {
            GateKind::CX | GateKind::CZ | GateKind::Swap => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown gate name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gate name: '{0}'")]
pub struct UnknownGate(pub String);

impl FromStr for GateKind {
    type Err = UnknownGate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        GateKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .or(match lower.as_str() {
                "i" => Some(GateKind::Id),
                "cnot" => Some(GateKind::CX),
                _ => None,
            })
            .ok_or_else(|| UnknownGate(s.to_string()))
    }
}

/// A gate together with its parameters.
///
/// Rotation angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate.
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate.
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// sqrt(X)-dagger gate.
    SXdg,
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Controlled-X (CNOT) gate. Qubit order is (control, target).
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
}

impl StandardGate {
    /// The parameter-free kind of this gate.
    #[inline]
    pub fn kind(&self) -> GateKind {
        match self {
            StandardGate::I => GateKind::Id,
            StandardGate::X => GateKind::X,
            StandardGate::Y => GateKind::Y,
            StandardGate::Z => GateKind::Z,
            StandardGate::H => GateKind::H,
            StandardGate::S => GateKind::S,
            StandardGate::Sdg => GateKind::Sdg,
            StandardGate::T => GateKind::T,
            StandardGate::Tdg => GateKind::Tdg,
            StandardGate::SX => GateKind::SX,
            StandardGate::SXdg => GateKind::SXdg,
            StandardGate::Rx(_) => GateKind::Rx,
            StandardGate::Ry(_) => GateKind::Ry,
            StandardGate::Rz(_) => GateKind::Rz,
            StandardGate::CX => GateKind::CX,
            StandardGate::CZ => GateKind::CZ,
            StandardGate::Swap => GateKind::Swap,
        }
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.kind().num_qubits()
    }

    /// The rotation angle, for parameterized gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Rx(theta) | StandardGate::Ry(theta) | StandardGate::Rz(theta) => {
                Some(*theta)
            }
            _ => None,
        }
    }

    /// Short label used by the circuit drawer.
    pub fn label(&self) -> String {
        match self.angle() {
            Some(theta) => format!("{}({theta:.3})", self.kind().name().to_uppercase()),
            None => self.kind().name().to_uppercase(),
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({theta})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}
