//! Execution dispatcher for qharness.
//!
//! Two steps take a [`Circuit`](qharness_ir::Circuit) to outcome counts:
//!
//! 1. [`adapt`] rewrites the circuit into the backend's native gates.
//! 2. [`run`] samples the adapted circuit a number of times and tallies
//!    each classical outcome.
//!
//! [`execute`] does both and records the wall-clock time.
//!
//! # Example
//!
//! ```rust
//! use qharness_adapter_sim::SimulatorBackend;
//! use qharness_exec::{adapt, run};
//! use qharness_hal::GateSet;
//! use qharness_ir::Circuit;
//!
//! let backend = SimulatorBackend::new()
//!     .with_gate_set(GateSet::heron())
//!     .with_seed(7);
//! let adapted = adapt(&Circuit::bell().unwrap(), &backend).unwrap();
//! let counts = run(&adapted, 1024).unwrap();
//!
//! assert_eq!(counts.total_shots(), 1024);
//! assert_eq!(counts.get("00") + counts.get("11"), 1024);
//! ```

pub mod adapt;
pub mod error;
pub mod run;

pub use adapt::{AdaptedCircuit, adapt};
pub use error::{ExecError, ExecResult};
pub use run::{execute, run};
