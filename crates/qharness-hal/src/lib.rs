//! qharness Hardware Abstraction Layer
//!
//! This crate defines the boundary between the execution layer and a
//! simulation target:
//! - A common [`Backend`] trait that samples one outcome per call
//! - [`Capabilities`] and [`GateSet`] to describe what a backend runs natively
//! - Outcome handling via [`Bitstring`], [`Counts`] and [`ExecutionResult`]
//! - [`BackendConfig`] and [`BackendFactory`] for configuration-driven setup
//!
//! # Implementing a Custom Backend
//!
//! ```rust
//! use qharness_hal::{Backend, Bitstring, Capabilities, HalResult};
//! use qharness_ir::Circuit;
//!
//! struct AllZeros {
//!     capabilities: Capabilities,
//! }
//!
//! impl Backend for AllZeros {
//!     fn name(&self) -> &str { "all_zeros" }
//!
//!     // Sync, infallible. Capabilities cached at construction.
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.capabilities
//!     }
//!
//!     fn sample(&self, circuit: &Circuit) -> HalResult<Bitstring> {
//!         Ok(Bitstring::zeros(circuit.num_clbits() as usize))
//!     }
//! }
//!
//! let backend = AllZeros { capabilities: Capabilities::simulator(2) };
//! let circuit = Circuit::bell().unwrap();
//! assert!(backend.validate(&circuit).is_valid());
//! assert_eq!(backend.sample(&circuit).unwrap().to_string(), "00");
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory, ValidationResult};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use result::{Bitstring, Counts, ExecutionResult};
