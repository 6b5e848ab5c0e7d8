//! Benchmarks for the simulator shot loop
//!
//! Run with: cargo bench -p qharness-adapter-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qharness_adapter_sim::SimulatorBackend;
use qharness_hal::Backend;
use qharness_ir::Circuit;

/// Benchmark single samples of GHZ circuits
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let backend = SimulatorBackend::new().with_seed(0);

    for num_qubits in &[2u32, 5, 10, 15] {
        let circuit = Circuit::ghz(*num_qubits).unwrap();
        group.bench_with_input(
            BenchmarkId::new("ghz", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| backend.sample(black_box(circuit)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark a full 1024-shot Bell run
fn bench_bell_shots(c: &mut Criterion) {
    let backend = SimulatorBackend::new().with_seed(0);
    let circuit = Circuit::bell().unwrap();

    c.bench_function("bell_1024_shots", |b| {
        b.iter(|| {
            let mut ones = 0u32;
            for _ in 0..1024 {
                let outcome = backend.sample(black_box(&circuit)).unwrap();
                ones += u32::from(outcome.get(0) == Some(true));
            }
            ones
        });
    });
}

criterion_group!(benches, bench_sample, bench_bell_shots);
criterion_main!(benches);
