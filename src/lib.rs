//! # capeparam-rs
//!
//! `capeparam-rs` is a runtime parameter model for process modeling components,
//! following the CAPE-OPEN parameter conventions.
//!
//! The library provides:
//! - Typed, self-validating parameters (boolean, integer, real, option, array)
//! - Delegating adapters exposing externally owned parameters through the same contract
//! - Ordered collections addressable by 1-based position or by name
//! - Synchronous change notifications
//! - Configurable policies for validation status and set-time checks
//!
//! ## Basic Usage
//!
//! ```
//! use capeparam_rs::parameters::{Parameter, ParamValue};
//!
//! let mut stages = Parameter::integer("Stages", 5, 1, 100);
//! stages.set_value(ParamValue::Int(150)).unwrap();
//!
//! let (valid, message) = stages.validate().into_parts();
//! assert!(!valid);
//! assert_eq!(message, "Value greater than upper bound.");
//!
//! stages.reset();
//! assert_eq!(stages.value(), &ParamValue::Int(5));
//! ```

// Public modules
pub mod config;
pub mod error;

// Parameter model
pub mod parameters;

// Re-exports for convenience
pub use config::ParameterConfig;
pub use error::{CapeParamError, Result};
pub use parameters::{
    Adapter, CapeParameter, ParamValue, Parameter, ParameterCollection, ParameterKind,
};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
