//! qharness Circuit Model
//!
//! This crate provides the circuit representation used across qharness: an
//! ordered sequence of operations over a fixed number of qubits and
//! classical bits.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`StandardGate`] (with parameters) and its parameter-free
//!   tag [`GateKind`], which backends use to describe native gate sets
//! - **Operations**: [`Operation`], either a gate, a single measurement or
//!   a measure-all
//! - **Circuit**: [`Circuit`], a validating builder
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qharness_ir::{Circuit, QubitId};
//!
//! // 2 qubits, 2 classical bits
//! let mut circuit = Circuit::new(2, 2).unwrap();
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_ops(), 3);
//! println!("{circuit}");
//! ```
//!
//! # Validation
//!
//! Every builder call checks its operands and leaves the circuit unchanged
//! on failure:
//!
//! ```rust
//! use qharness_ir::{Circuit, IrError, QubitId};
//!
//! let mut circuit = Circuit::new(2, 2).unwrap();
//! assert!(matches!(circuit.h(QubitId(5)), Err(IrError::IndexOutOfRange { .. })));
//! assert!(matches!(
//!     circuit.cx(QubitId(1), QubitId(1)),
//!     Err(IrError::SelfTarget { .. })
//! ));
//! assert_eq!(circuit.num_ops(), 0);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `id` | 1 | Identity |
//! | `x`, `y`, `z` | 1 | Pauli gates |
//! | `h` | 1 | Hadamard |
//! | `s`, `sdg`, `t`, `tdg` | 1 | Phase gates |
//! | `sx`, `sxdg` | 1 | sqrt(X) and its inverse |
//! | `rx`, `ry`, `rz` | 1 | Rotations |
//! | `cx` | 2 | Controlled-NOT |
//! | `cz` | 2 | Controlled-Z |
//! | `swap` | 2 | SWAP |

pub mod circuit;
pub mod draw;
pub mod error;
pub mod gate;
pub mod operation;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{Index, IrError, IrResult};
pub use gate::{GateKind, StandardGate, UnknownGate};
pub use operation::Operation;
pub use qubit::{ClbitId, QubitId};
