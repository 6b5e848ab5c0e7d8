//! Circuits adapted and run on the statevector simulator.

use proptest::prelude::*;
use qharness_adapter_sim::SimulatorBackend;
use qharness_exec::{ExecError, adapt, execute, run};
use qharness_hal::{Backend, GateSet, HalError};
use qharness_ir::{Circuit, ClbitId, QubitId};

fn profiles() -> Vec<(&'static str, GateSet)> {
    vec![
        ("universal", GateSet::universal()),
        ("ibm", GateSet::ibm()),
        ("heron", GateSet::heron()),
        ("neutral-atom", GateSet::neutral_atom()),
    ]
}

#[test]
fn test_bell_only_correlated_outcomes() {
    for (profile, gate_set) in profiles() {
        let backend = SimulatorBackend::new().with_gate_set(gate_set).with_seed(42);
        let adapted = adapt(&Circuit::bell().unwrap(), &backend).unwrap();
        let counts = run(&adapted, 1024).unwrap();

        assert_eq!(counts.total_shots(), 1024, "{profile}");
        assert_eq!(counts.get("00") + counts.get("11"), 1024, "{profile}: {counts}");
        assert!(counts.get("00") > 400, "{profile}: {counts}");
        assert!(counts.get("11") > 400, "{profile}: {counts}");
    }
}

#[test]
fn test_single_measure_of_idle_qubit() {
    let mut circuit = Circuit::new(1, 1).unwrap();
    circuit.measure(QubitId(0), ClbitId(0)).unwrap();

    let backend = SimulatorBackend::new();
    let counts = run(&adapt(&circuit, &backend).unwrap(), 100).unwrap();

    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("0"), 100);
}

#[test]
fn test_zero_shots() {
    let backend = SimulatorBackend::new();
    let adapted = adapt(&Circuit::bell().unwrap(), &backend).unwrap();
    assert!(matches!(
        run(&adapted, 0),
        Err(ExecError::InvalidShotCount { shots: 0 })
    ));
}

#[test]
fn test_adapt_does_not_modify_input() {
    let circuit = Circuit::bell().unwrap();
    let before = circuit.operations().to_vec();

    let backend = SimulatorBackend::new().with_gate_set(GateSet::heron());
    let adapted = adapt(&circuit, &backend).unwrap();

    assert_eq!(circuit.operations(), before.as_slice());
    assert!(backend.validate(adapted.circuit()).is_valid());
    assert!(!backend.validate(&circuit).is_valid());
}

#[test]
fn test_deterministic_circuits_agree_across_profiles() {
    // X on q0, then CX copies it to q1; q2 stays |0>.
    let mut circuit = Circuit::new(3, 3).unwrap();
    circuit
        .x(QubitId(0))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap()
        .swap(QubitId(1), QubitId(2))
        .unwrap()
        .measure_all()
        .unwrap();

    for (profile, gate_set) in profiles() {
        let backend = SimulatorBackend::new().with_gate_set(gate_set).with_seed(1);
        let counts = run(&adapt(&circuit, &backend).unwrap(), 50).unwrap();
        // clbit 2 leftmost: q2 = 1, q1 = 0, q0 = 1.
        assert_eq!(counts.get("101"), 50, "{profile}: {counts}");
    }
}

#[test]
fn test_same_seed_same_counts() {
    let circuit = Circuit::ghz(3).unwrap();
    let first = {
        let backend = SimulatorBackend::new().with_gate_set(GateSet::ibm()).with_seed(99);
        run(&adapt(&circuit, &backend).unwrap(), 256).unwrap()
    };
    let second = {
        let backend = SimulatorBackend::new().with_gate_set(GateSet::ibm()).with_seed(99);
        run(&adapt(&circuit, &backend).unwrap(), 256).unwrap()
    };
    assert_eq!(first.sorted(), second.sorted());
}

#[test]
fn test_unsupported_operation() {
    // Without single-qubit gates nothing can express H.
    let backend = SimulatorBackend::new().with_gate_set(GateSet::new([qharness_ir::GateKind::CX]));
    let err = adapt(&Circuit::bell().unwrap(), &backend).unwrap_err();
    match err {
        ExecError::UnsupportedOperation { gate, qubits, backend } => {
            assert_eq!(gate, "h");
            assert_eq!(qubits, vec![QubitId(0)]);
            assert_eq!(backend, "simulator");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_circuit_too_large() {
    let backend = SimulatorBackend::new().with_max_qubits(2);
    let err = adapt(&Circuit::ghz(3).unwrap(), &backend).unwrap_err();
    assert!(matches!(err, ExecError::Hal(HalError::CircuitTooLarge(_))));
}

#[test]
fn test_execute_ghz() {
    let backend = SimulatorBackend::new().with_gate_set(GateSet::neutral_atom()).with_seed(5);
    let result = execute(&Circuit::ghz(4).unwrap(), &backend, 200).unwrap();

    assert_eq!(result.shots, 200);
    assert_eq!(result.counts.get("0000") + result.counts.get("1111"), 200);
    assert!(result.execution_time_ms.is_some());
}

#[test]
fn test_shared_backend_across_threads() {
    let backend = SimulatorBackend::new().with_gate_set(GateSet::heron()).with_seed(11);
    let bell = Circuit::bell().unwrap();
    let ghz = Circuit::ghz(3).unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let backend = &backend;
                let circuit = if i % 2 == 0 { &bell } else { &ghz };
                let shots = 100 + 37 * i;
                scope.spawn(move || {
                    let adapted = adapt(circuit, backend).unwrap();
                    (circuit.num_clbits(), shots, run(&adapted, shots).unwrap())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), 8);
    for (width, shots, counts) in results {
        assert_eq!(counts.total_shots(), u64::from(shots));
        let all_zero = "0".repeat(width as usize);
        let all_one = "1".repeat(width as usize);
        assert_eq!(counts.get(&all_zero) + counts.get(&all_one), u64::from(shots), "{counts}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn counts_sum_to_shots_with_register_width_keys(
        num_qubits in 1u32..5,
        extra_clbits in 0u32..3,
        shots in 1u32..300,
        seed in any::<u64>(),
    ) {
        let num_clbits = num_qubits + extra_clbits;
        let mut circuit = Circuit::new(num_qubits, num_clbits).unwrap();
        for q in 0..num_qubits {
            circuit.h(QubitId(q)).unwrap();
        }
        circuit.measure_all().unwrap();

        let backend = SimulatorBackend::new().with_gate_set(GateSet::heron()).with_seed(seed);
        let counts = run(&adapt(&circuit, &backend).unwrap(), shots).unwrap();

        prop_assert_eq!(counts.total_shots(), u64::from(shots));
        for (key, _) in counts.iter() {
            prop_assert_eq!(key.len(), num_clbits as usize);
        }
    }
}
