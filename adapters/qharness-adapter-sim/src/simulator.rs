//! Simulator backend implementation.

use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use tracing::{debug, instrument};

use qharness_hal::{
    Backend, BackendConfig, BackendFactory, Bitstring, Capabilities, GateSet, HalError, HalResult,
};
use qharness_ir::{Circuit, GateKind, Operation};

use crate::statevector::Statevector;

/// Default qubit limit; a 20-qubit statevector takes 16 MB.
const DEFAULT_MAX_QUBITS: u32 = 20;

/// Hard qubit limit; a 30-qubit statevector takes 16 GB.
pub const MAX_SUPPORTED_QUBITS: u32 = 30;

/// Local simulator backend.
///
/// Each call to [`Backend::sample`] prepares a fresh statevector, applies
/// the circuit's gates in order and measures as the circuit says. Gates
/// outside the configured native gate set are rejected, so callers adapt
/// circuits first.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Seed the generator was created from, if any.
    seed: Option<u64>,
    /// Measurement randomness, shared by all samples.
    rng: Mutex<StdRng>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            capabilities: Capabilities::simulator(DEFAULT_MAX_QUBITS),
            seed: None,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Make measurement outcomes reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Set the largest circuit the simulator accepts.
    ///
    /// Limits above [`MAX_SUPPORTED_QUBITS`] are clamped to it.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.capabilities.num_qubits = max_qubits.min(MAX_SUPPORTED_QUBITS);
        self
    }

    /// Set the per-run shot limit.
    #[must_use]
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.capabilities.max_shots = max_shots;
        self
    }

    /// Restrict the native gate set, e.g. to [`GateSet::heron`].
    #[must_use]
    pub fn with_gate_set(mut self, gate_set: GateSet) -> Self {
        self.capabilities.gate_set = gate_set;
        self
    }

    /// The seed, when outcomes are reproducible.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn check_circuit(&self, circuit: &Circuit) -> HalResult<()> {
        if circuit.num_qubits() > self.capabilities.num_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }
        let foreign = circuit
            .operations()
            .iter()
            .filter_map(Operation::as_gate)
            .find(|gate| !self.capabilities.gate_set.contains(gate.kind()));
        if let Some(gate) = foreign {
            return Err(HalError::InvalidCircuit(format!(
                "Gate '{}' is not in the native gate set {} of '{}'",
                gate.name(),
                self.capabilities.gate_set,
                self.name()
            )));
        }
        Ok(())
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[instrument(level = "trace", skip(self, circuit), fields(circuit = circuit.name()))]
    fn sample(&self, circuit: &Circuit) -> HalResult<Bitstring> {
        self.check_circuit(circuit)?;

        let num_qubits = circuit.num_qubits() as usize;
        let mut state = Statevector::new(num_qubits);
        let mut bits = Bitstring::zeros(circuit.num_clbits() as usize);
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        for op in circuit.operations() {
            match op {
                Operation::Gate { gate, qubits } => state.apply_gate(gate, qubits),
                Operation::Measure { qubit, clbit } => {
                    let outcome = state.measure(qubit.index(), &mut *rng);
                    bits.set(clbit.index(), outcome);
                }
                Operation::MeasureAll => {
                    for q in 0..num_qubits {
                        let outcome = state.measure(q, &mut *rng);
                        bits.set(q, outcome);
                    }
                }
            }
        }

        Ok(bits)
    }
}

impl BackendFactory for SimulatorBackend {
    /// Recognised keys: `max_qubits`, `max_shots`, `seed` (integers) and
    /// `gate_set` (a profile name or an array of gate names).
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config_u32(&config, "max_qubits")?.unwrap_or(DEFAULT_MAX_QUBITS);
        if max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(HalError::Configuration(format!(
                "'max_qubits' is {max_qubits} but the statevector simulator supports at most {MAX_SUPPORTED_QUBITS}"
            )));
        }
        let max_shots = config_u32(&config, "max_shots")?;
        let seed = config_u64(&config, "seed")?;
        let gate_set = config
            .get("gate_set")
            .map(parse_gate_set)
            .transpose()?;

        let mut capabilities = Capabilities::simulator(max_qubits);
        capabilities.name.clone_from(&config.name);
        if let Some(max_shots) = max_shots {
            capabilities.max_shots = max_shots;
        }
        if let Some(gate_set) = gate_set {
            capabilities.gate_set = gate_set;
        }
        debug!(
            "Configured simulator '{}': {} qubits, gate set {}",
            config.name, capabilities.num_qubits, capabilities.gate_set
        );

        let backend = Self {
            config,
            capabilities,
            seed: None,
            rng: Mutex::new(StdRng::from_entropy()),
        };
        Ok(match seed {
            Some(seed) => backend.with_seed(seed),
            None => backend,
        })
    }
}

fn config_u64(config: &BackendConfig, key: &str) -> HalResult<Option<u64>> {
    config
        .get(key)
        .map(|value| {
            value.as_u64().ok_or_else(|| {
                HalError::Configuration(format!(
                    "'{key}' must be a non-negative integer, got {value}"
                ))
            })
        })
        .transpose()
}

fn config_u32(config: &BackendConfig, key: &str) -> HalResult<Option<u32>> {
    config_u64(config, key)?
        .map(|v| {
            u32::try_from(v)
                .map_err(|_| HalError::Configuration(format!("'{key}' is too large: {v}")))
        })
        .transpose()
}

fn parse_gate_set(value: &Value) -> HalResult<GateSet> {
    match value {
        Value::String(name) => GateSet::from_profile(name).ok_or_else(|| {
            HalError::Configuration(format!(
                "Unknown gate set profile '{name}' (expected one of: {})",
                GateSet::PROFILES.join(", ")
            ))
        }),
        Value::Array(names) => names
            .iter()
            .map(|v| {
                let name = v.as_str().ok_or_else(|| {
                    HalError::Configuration(format!("Gate names must be strings, got {v}"))
                })?;
                GateKind::from_str(name).map_err(|e| HalError::Configuration(e.to_string()))
            })
            .collect(),
        other => Err(HalError::Configuration(format!(
            "'gate_set' must be a profile name or a list of gates, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qharness_ir::{ClbitId, QubitId};
    use serde_json::json;

    #[test]
    fn test_simulator_capabilities() {
        let backend = SimulatorBackend::new();
        let caps = backend.capabilities();

        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert_eq!(caps.max_shots, 100_000);
        assert_eq!(backend.native_gate_set(), &GateSet::universal());
        assert_eq!(backend.name(), "simulator");
        assert_eq!(backend.seed(), None);
    }

    #[test]
    fn test_simulator_bell_state() {
        let backend = SimulatorBackend::new().with_seed(1);
        let circuit = Circuit::bell().unwrap();

        for _ in 0..200 {
            let outcome = backend.sample(&circuit).unwrap().to_string();
            assert!(outcome == "00" || outcome == "11", "got {outcome}");
        }
    }

    #[test]
    fn test_simulator_ghz_state() {
        let backend = SimulatorBackend::new().with_seed(2);
        let circuit = Circuit::ghz(3).unwrap();

        for _ in 0..200 {
            let outcome = backend.sample(&circuit).unwrap().to_string();
            assert!(outcome == "000" || outcome == "111", "got {outcome}");
        }
    }

    #[test]
    fn test_bit_order() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::new(2, 2).unwrap();
        circuit
            .x(QubitId(0))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap();
        assert_eq!(backend.sample(&circuit).unwrap().to_string(), "01");
    }

    #[test]
    fn test_unmeasured_clbits_read_zero() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::new(1, 3).unwrap();
        circuit
            .x(QubitId(0))
            .unwrap()
            .measure(QubitId(0), ClbitId(2))
            .unwrap();
        assert_eq!(backend.sample(&circuit).unwrap().to_string(), "100");
    }

    #[test]
    fn test_no_clbits_gives_empty_outcome() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::new(1, 0).unwrap();
        circuit.h(QubitId(0)).unwrap();
        assert!(backend.sample(&circuit).unwrap().is_empty());
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let circuit = Circuit::bell().unwrap();
        let a = SimulatorBackend::new().with_seed(99);
        let b = SimulatorBackend::new().with_seed(99);
        let run = |backend: &SimulatorBackend| -> Vec<String> {
            (0..64)
                .map(|_| backend.sample(&circuit).unwrap().to_string())
                .collect()
        };
        assert_eq!(run(&a), run(&b));
    }

    #[test]
    fn test_simulator_too_many_qubits() {
        let backend = SimulatorBackend::new().with_max_qubits(5);
        let circuit = Circuit::new(10, 0).unwrap();
        let result = backend.sample(&circuit);
        assert!(matches!(result, Err(HalError::CircuitTooLarge(_))));
    }

    #[test]
    fn test_non_native_gate_rejected() {
        let backend = SimulatorBackend::new().with_gate_set(GateSet::heron());
        let circuit = Circuit::bell().unwrap();
        let err = backend.sample(&circuit).unwrap_err();
        assert!(matches!(err, HalError::InvalidCircuit(_)));
        assert!(err.to_string().contains("'h'"));
    }

    #[test]
    fn test_from_config() {
        let config = BackendConfig::new("heron-sim")
            .with_extra("max_qubits", json!(8))
            .with_extra("max_shots", json!(500))
            .with_extra("seed", json!(7))
            .with_extra("gate_set", json!("heron"));
        let backend = SimulatorBackend::from_config(config).unwrap();

        assert_eq!(backend.name(), "heron-sim");
        assert_eq!(backend.capabilities().name, "heron-sim");
        assert_eq!(backend.capabilities().num_qubits, 8);
        assert_eq!(backend.capabilities().max_shots, 500);
        assert_eq!(backend.native_gate_set(), &GateSet::heron());
        assert_eq!(backend.seed(), Some(7));
    }

    #[test]
    fn test_from_config_gate_list() {
        let config =
            BackendConfig::new("sim").with_extra("gate_set", json!(["rz", "SX", "cnot"]));
        let backend = SimulatorBackend::from_config(config).unwrap();
        assert_eq!(
            backend.native_gate_set(),
            &GateSet::new([GateKind::Rz, GateKind::SX, GateKind::CX])
        );
    }

    #[test]
    fn test_from_config_defaults() {
        let backend = SimulatorBackend::from_config(BackendConfig::new("simulator")).unwrap();
        assert_eq!(backend.capabilities().num_qubits, 20);
        assert_eq!(backend.native_gate_set(), &GateSet::universal());
    }

    #[test]
    fn test_from_config_rejects_bad_values() {
        let bad = [
            ("max_qubits", json!(-1)),
            ("max_qubits", json!("many")),
            ("max_shots", json!(u64::MAX)),
            ("seed", json!(1.5)),
            ("gate_set", json!("ion-trap")),
            ("gate_set", json!(["h", "ecr"])),
            ("gate_set", json!([1, 2])),
            ("gate_set", json!(true)),
        ];
        for (key, value) in bad {
            let config = BackendConfig::new("sim").with_extra(key, value.clone());
            let result = SimulatorBackend::from_config(config);
            assert!(
                matches!(result, Err(HalError::Configuration(_))),
                "{key} = {value} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_config_rejects_oversized_statevector() {
        for max_qubits in [MAX_SUPPORTED_QUBITS + 1, 64, u32::MAX] {
            let config =
                BackendConfig::new("sim").with_extra("max_qubits", json!(max_qubits));
            let result = SimulatorBackend::from_config(config);
            assert!(
                matches!(result, Err(HalError::Configuration(_))),
                "max_qubits = {max_qubits} should be rejected"
            );
        }

        let config = BackendConfig::new("sim").with_extra("max_qubits", json!(MAX_SUPPORTED_QUBITS));
        let backend = SimulatorBackend::from_config(config).unwrap();
        assert_eq!(backend.capabilities().num_qubits, MAX_SUPPORTED_QUBITS);
    }

    #[test]
    fn test_max_qubits_clamped() {
        let backend = SimulatorBackend::new().with_max_qubits(64);
        assert_eq!(backend.capabilities().num_qubits, MAX_SUPPORTED_QUBITS);

        let mut circuit = Circuit::new(64, 1).unwrap();
        circuit.measure(QubitId(63), ClbitId(0)).unwrap();
        assert!(matches!(
            backend.sample(&circuit),
            Err(HalError::CircuitTooLarge(_))
        ));
    }
}
