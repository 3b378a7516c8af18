//! # Parameter Model
//!
//! This module provides the runtime parameter model used by process modeling
//! components: named, typed, self-validating values organised into ordered,
//! name-addressable collections.
//!
//! ## Key Features
//!
//! - **Typed Values**: Booleans, bounded integers, bounded reals, option strings and arrays
//! - **Explicit Validation**: Values outside their bounds are stored and reported by `validate()`
//! - **Owned or Delegated**: The same contract for parameters owned here and parameters owned elsewhere
//! - **Collections**: Lookup by 1-based position or by name
//! - **Change Notifications**: Synchronous events for every mutation
//!
//! ## Core Components
//!
//! - [`CapeParameter`]: The contract every parameter presents to a host
//! - [`Parameter`]: A parameter owning its state
//! - [`Adapter`]: A parameter forwarding to a shared [`ParameterDelegate`]
//! - [`ParameterCollection`]: An ordered collection of parameters
//! - [`KindSpec`]: Kind-specific specifications (bounds, option lists, array items)
//! - [`Notifier`]: Synchronous event dispatch
//!
//! ## Example Usage
//!
//! ```rust
//! use capeparam_rs::parameters::{
//!     CapeParameter, ParamValue, Parameter, ParameterCollection, ValidationStatus,
//! };
//!
//! let mut collection = ParameterCollection::named("Flash", "Flash drum settings");
//! collection.add(Parameter::real("Pressure", 101325.0, 0.0, f64::INFINITY));
//! collection.add(Parameter::option("Method", "TP", ["TP", "PH", "TV"], true));
//!
//! // Restricted options are rejected immediately
//! let method = collection.item_mut("Method").unwrap();
//! assert!(method.set_value(ParamValue::from("XX")).is_err());
//!
//! // Numeric values are only checked by validate()
//! let pressure = collection.item_mut(1).unwrap();
//! pressure.set_value(ParamValue::Real(-5.0)).unwrap();
//! assert!(!pressure.validate().is_valid());
//! assert_eq!(pressure.validation_status(), ValidationStatus::Invalid);
//! ```

pub mod adapter;
pub mod bounds;
pub mod collection;
pub mod events;
pub mod parameter;
pub mod spec;
pub mod status;
pub mod text;
pub mod value;


// Re-export key types
pub use adapter::{Adapter, ParameterDelegate};
pub use bounds::{BoundCheck, BoundedScalar, Bounds};
pub use collection::{ItemKey, ParameterCollection};
pub use events::{
    CollectionEvent, CollectionEventKind, Event, ListChange, Listener, Notifier, ParameterEvent,
    ParameterEventKind, SubscriptionId,
};
pub use parameter::{CapeParameter, Capability, Parameter, ParameterError};
pub use spec::{ArraySpec, BooleanSpec, ConformError, IntegerSpec, KindSpec, OptionSpec, RealSpec};
pub use status::{messages, Validation, ValidationStatus};
pub use text::{parse_value, ParseError};
pub use value::{ParamMode, ParamValue, ParameterKind};
