//! Backend trait and configuration.
//!
//! The [`Backend`] trait is the only thing the execution layer knows about
//! a simulation target:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ sample() × shots
//!    (sync, &ref)       (provided)     (one outcome per call)
//! ```
//!
//! ## Method table
//!
//! | Method | Required | Returns |
//! |--------|----------|---------|
//! | `name()` | yes | `&str` |
//! | `capabilities()` | yes | `&Capabilities` |
//! | `native_gate_set()` | provided | `&GateSet` |
//! | `validate()` | provided | `ValidationResult` |
//! | `sample()` | yes | `HalResult<Bitstring>` |

use std::fmt;

use qharness_ir::Circuit;
use serde::{Deserialize, Serialize};

use crate::capability::{Capabilities, GateSet};
use crate::error::HalResult;
use crate::result::Bitstring;

/// Configuration for a backend instance.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Backend-specific settings.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Look up an extra setting.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> HalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("name", &self.name)
            .field("extra", &self.extra)
            .finish()
    }
}

/// A simulation target.
///
/// # Contract
///
/// - `capabilities()` is synchronous and infallible. Implementations cache
///   capabilities at construction time.
/// - `sample()` executes the circuit once and returns one outcome with
///   exactly `circuit.num_clbits()` bits. Callers adapt the circuit to
///   [`Backend::native_gate_set`] before sampling.
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Gate kinds this backend executes without decomposition.
    fn native_gate_set(&self) -> &GateSet {
        &self.capabilities().gate_set
    }

    /// Validate a circuit against backend constraints.
    ///
    /// Checks the qubit count and that every gate is native.
    fn validate(&self, circuit: &Circuit) -> ValidationResult {
        let caps = self.capabilities();
        if circuit.num_qubits() > caps.num_qubits {
            return ValidationResult::Invalid {
                reasons: vec![format!(
                    "circuit has {} qubits but backend '{}' supports {}",
                    circuit.num_qubits(),
                    self.name(),
                    caps.num_qubits
                )],
            };
        }

        let mut foreign: Vec<&str> = circuit
            .operations()
            .iter()
            .filter_map(|op| op.as_gate())
            .filter(|gate| !caps.gate_set.contains(gate.kind()))
            .map(|gate| gate.name())
            .collect();
        if foreign.is_empty() {
            return ValidationResult::Valid;
        }
        foreign.sort_unstable();
        foreign.dedup();
        ValidationResult::RequiresTranspilation {
            details: format!("non-native gates: {}", foreign.join(", ")),
        }
    }

    /// Run the circuit once and return the classical outcome.
    fn sample(&self, circuit: &Circuit) -> HalResult<Bitstring>;
}

/// Result of circuit validation against backend constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Circuit can run as-is.
    Valid,
    /// Circuit cannot run on this backend.
    Invalid {
        /// Reasons the circuit is invalid.
        reasons: Vec<String>,
    },
    /// Circuit could run after adaptation.
    RequiresTranspilation {
        /// What adaptation is needed.
        details: String,
    },
}

impl ValidationResult {
    /// Check if the circuit is valid (can be run as-is).
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Valid => f.write_str("valid"),
            ValidationResult::Invalid { reasons } => write!(f, "invalid: {}", reasons.join("; ")),
            ValidationResult::RequiresTranspilation { details } => {
                write!(f, "requires transpilation: {details}")
            }
        }
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}
