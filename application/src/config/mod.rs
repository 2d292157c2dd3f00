//! Application-level configuration.
//!
//! - [`GateParams`] - artifact layout and probe timeout for gate validation

pub mod gate_params;

pub use gate_params::GateParams;
