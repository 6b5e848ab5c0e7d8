//! qharness Local Statevector Simulator
//!
//! This crate provides the local simulation target used by the harness. It
//! keeps a full statevector, so results are exact up to sampling noise, and
//! is limited to roughly 20-25 qubits.
//!
//! # Features
//!
//! - **Mid-circuit measurement**: every measurement collapses the state
//! - **Configurable native gate set**: mimic IBM, Heron or neutral-atom
//!   targets so the adaptation step has real work to do
//! - **Seeded sampling**: identical seeds give identical outcome sequences
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//!
//! # Example
//!
//! ```rust
//! use qharness_adapter_sim::SimulatorBackend;
//! use qharness_hal::Backend;
//! use qharness_ir::Circuit;
//!
//! let backend = SimulatorBackend::new().with_seed(42);
//!
//! // Capabilities are sync and infallible
//! assert_eq!(backend.capabilities().num_qubits, 20);
//!
//! let circuit = Circuit::bell().unwrap();
//! let outcome = backend.sample(&circuit).unwrap().to_string();
//! assert!(outcome == "00" || outcome == "11");
//! ```

mod simulator;
mod statevector;

pub use simulator::{MAX_SUPPORTED_QUBITS, SimulatorBackend};
pub use statevector::Statevector;
