//! qharness Basis Translation
//!
//! Rewrites circuits into the native gate set of a target backend.
//!
//! # Example
//!
//! ```rust
//! use qharness_compile::{BasisGates, BasisTranslation};
//! use qharness_ir::Circuit;
//!
//! let bell = Circuit::bell().unwrap();
//! let heron = BasisTranslation::new(BasisGates::heron()).run(&bell).unwrap();
//!
//! // H and CX are not Heron-native; both are decomposed.
//! assert!(!heron.count_ops().contains_key("h"));
//! assert_eq!(heron.count_ops()["cz"], 1);
//! ```

pub mod basis;
pub mod error;
pub mod translation;
pub mod unitary;

pub use basis::BasisGates;
pub use error::{CompileError, CompileResult};
pub use translation::{BasisTranslation, Placed, decompositions};
pub use unitary::Unitary2x2;
