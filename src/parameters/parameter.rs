//! Parameter contract and the owned parameter
//!
//! [`CapeParameter`] is the contract every parameter presents to a host: a named,
//! typed value with a specification, an explicit validation step and change
//! notifications. [`Parameter`] is the implementation that owns all of its state.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ParameterConfig;
use crate::parameters::events::{
    Listener, Notifier, ParameterEvent, ParameterEventKind, SubscriptionId,
};
use crate::parameters::spec::{
    ArraySpec, BooleanSpec, ConformError, IntegerSpec, KindSpec, OptionSpec, RealSpec,
};
use crate::parameters::status::{messages, Validation, ValidationStatus};
use crate::parameters::text::{parse_value, ParseError};
use crate::parameters::value::{ParamMode, ParamValue, ParameterKind};

/// Errors that can occur when working with parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidValue { name: String, message: String },

    #[error("Parameter '{name}' expects a {expected} value, got {found}")]
    KindMismatch {
        name: String,
        expected: ParameterKind,
        found: ParameterKind,
    },

    #[error("Item {key} not found.")]
    NotFound { key: String },

    #[error("Parameter '{name}' does not support changing its {capability}")]
    CapabilityUnavailable { name: String, capability: Capability },

    #[error("Failed to initialise parameter '{name}': {message}")]
    FailedInitialisation { name: String, message: String },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Optional mutators of the parameter contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Mode,
    DefaultValue,
    LowerBound,
    UpperBound,
    OptionList,
    RestrictedToList,
}

impl Capability {
    /// Whether parameters of `kind` carry the field this capability mutates
    pub fn is_supported_by(self, kind: ParameterKind) -> bool {
        match self {
            Self::Mode | Self::DefaultValue => true,
            Self::LowerBound | Self::UpperBound => {
                matches!(kind, ParameterKind::Integer | ParameterKind::Real)
            }
            Self::OptionList | Self::RestrictedToList => kind == ParameterKind::Option,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mode => f.write_str("mode"),
            Self::DefaultValue => f.write_str("default value"),
            Self::LowerBound => f.write_str("lower bound"),
            Self::UpperBound => f.write_str("upper bound"),
            Self::OptionList => f.write_str("option list"),
            Self::RestrictedToList => f.write_str("restricted-to-list flag"),
        }
    }
}

/// The contract a host sees for every parameter, owned or delegated
///
/// The trait is object safe; collections hold `Box<dyn CapeParameter>`.
pub trait CapeParameter {
    fn name(&self) -> &str;

    /// Rename the parameter, firing `NameChanged`
    fn set_name(&mut self, name: &str);

    fn description(&self) -> &str;

    /// Change the description, firing `DescriptionChanged`
    fn set_description(&mut self, description: &str);

    fn mode(&self) -> ParamMode;

    /// Change the mode, firing `ModeChanged`
    fn set_mode(&mut self, mode: ParamMode) -> Result<(), ParameterError>;

    /// A copy of the current specification
    fn specification(&self) -> KindSpec;

    /// A copy of the current value
    fn value(&self) -> ParamValue;

    /// Store a new value, firing `ValueChanged`
    ///
    /// The value is coerced to the parameter's kind. Values outside a restricted
    /// option list are rejected.
    fn set_value(&mut self, value: ParamValue) -> Result<(), ParameterError>;

    fn validation_status(&self) -> ValidationStatus;

    /// Validate the current value, update the status and fire `Validated`
    fn validate(&mut self) -> Validation;

    /// Restore the default value and fire `Reset`
    ///
    /// The status is not re-derived; call `validate()` afterwards.
    fn reset(&mut self);

    fn set_default_value(&mut self, value: ParamValue) -> Result<(), ParameterError>;

    fn set_lower_bound(&mut self, bound: ParamValue) -> Result<(), ParameterError>;

    fn set_upper_bound(&mut self, bound: ParamValue) -> Result<(), ParameterError>;

    fn set_option_list(&mut self, options: Vec<String>) -> Result<(), ParameterError>;

    fn set_restricted_to_list(&mut self, restricted: bool) -> Result<(), ParameterError>;

    /// Register a listener for one kind of event
    fn subscribe(
        &mut self,
        kind: ParameterEventKind,
        listener: Listener<ParameterEvent>,
    ) -> SubscriptionId;

    /// Register a listener for every event
    fn subscribe_all(&mut self, listener: Listener<ParameterEvent>) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Clone behind a box, with the clone semantics of the implementation
    fn clone_boxed(&self) -> Box<dyn CapeParameter>;

    fn kind(&self) -> ParameterKind {
        self.specification().kind()
    }

    fn default_value(&self) -> ParamValue {
        self.specification().default_value()
    }

    fn lower_bound(&self) -> Option<ParamValue> {
        self.specification().lower_bound()
    }

    fn upper_bound(&self) -> Option<ParamValue> {
        self.specification().upper_bound()
    }

    fn option_list(&self) -> Option<Vec<String>> {
        self.specification().option_list().map(<[String]>::to_vec)
    }

    fn restricted_to_list(&self) -> Option<bool> {
        self.specification().restricted_to_list()
    }

    /// Validate a candidate value without storing it or touching the status
    fn validate_value(&self, value: &ParamValue) -> Validation {
        self.specification().validate(value)
    }

    /// Parse host-entered text per the specification and store the result
    fn set_value_text(&mut self, text: &str) -> Result<(), ParameterError> {
        let value = parse_value(&self.specification(), text)?;
        self.set_value(value)
    }
}

impl fmt::Debug for dyn CapeParameter + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapeParameter")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("value", &self.value())
            .field("status", &self.validation_status())
            .finish()
    }
}

impl Clone for Box<dyn CapeParameter> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Coerce `value` to the shape of `spec`, naming the parameter in errors
pub(crate) fn conform_for(
    name: &str,
    spec: &KindSpec,
    value: ParamValue,
) -> Result<ParamValue, ParameterError> {
    spec.conform(value).map_err(|err| match err {
        ConformError::KindMismatch { expected, found } => ParameterError::KindMismatch {
            name: name.to_string(),
            expected,
            found,
        },
        ConformError::SizeMismatch { .. } => ParameterError::InvalidValue {
            name: name.to_string(),
            message: messages::ARRAY_SIZE_MISMATCH.to_string(),
        },
    })
}

/// The reason a conformed value must be refused at set time, if any
///
/// Restricted option lists are always enforced. Bounds are only enforced when
/// `reject_out_of_bounds` is set.
pub(crate) fn rejection_message(
    spec: &KindSpec,
    config: &ParameterConfig,
    value: &ParamValue,
) -> Option<String> {
    match (spec, value) {
        (KindSpec::Option(option), ParamValue::Option(text)) => {
            let outcome = option.check(text);
            (!outcome.is_valid()).then(|| outcome.message().to_string())
        }
        (KindSpec::Integer(_) | KindSpec::Real(_), _) if config.reject_out_of_bounds => {
            let outcome = spec.validate(value);
            (!outcome.is_valid()).then(|| outcome.message().to_string())
        }
        (KindSpec::Array(array), ParamValue::Array(elements)) => array
            .items
            .iter()
            .zip(elements)
            .find_map(|(item, element)| rejection_message(item, config, element)),
        _ => None,
    }
}

/// A parameter owning its name, value, specification and listeners
///
/// Cloning produces an independent copy with the same identity, value and
/// specification. Listeners are not cloned.
///
/// # Examples
///
/// ```
/// use capeparam_rs::parameters::{Parameter, ParamValue, ValidationStatus};
///
/// let mut stages = Parameter::integer("Stages", 5, 1, 100);
/// stages.set_value(ParamValue::Int(150)).unwrap();
/// assert_eq!(stages.value(), &ParamValue::Int(150));
///
/// let outcome = stages.validate();
/// assert!(!outcome.is_valid());
/// assert_eq!(outcome.message(), "Value greater than upper bound.");
/// assert_eq!(stages.validation_status(), ValidationStatus::Invalid);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ParameterRecord")]
pub struct Parameter {
    name: String,
    description: String,
    mode: ParamMode,
    value: ParamValue,
    spec: KindSpec,
    status: ValidationStatus,
    config: ParameterConfig,
    #[serde(skip)]
    notifier: Notifier<ParameterEvent>,
}

/// The persisted form of a [`Parameter`], checked before it becomes one
#[derive(Deserialize)]
struct ParameterRecord {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    mode: ParamMode,
    value: ParamValue,
    spec: KindSpec,
    #[serde(default)]
    status: ValidationStatus,
    #[serde(default)]
    config: ParameterConfig,
}

impl TryFrom<ParameterRecord> for Parameter {
    type Error = ParameterError;

    /// Coerce the stored value to the stored specification
    ///
    /// A value of another kind, or an array of another size, is an error.
    fn try_from(record: ParameterRecord) -> Result<Self, Self::Error> {
        let value = conform_for(&record.name, &record.spec, record.value)?;

        Ok(Self {
            name: record.name,
            description: record.description,
            mode: record.mode,
            value,
            spec: record.spec,
            status: record.status,
            config: record.config,
            notifier: Notifier::new(),
        })
    }
}

impl Parameter {
    /// Create a parameter holding the default of `spec`
    ///
    /// The status starts as `NotValidated`.
    pub fn new(name: &str, spec: impl Into<KindSpec>) -> Self {
        let spec = spec.into();
        Self {
            name: name.to_string(),
            description: String::new(),
            mode: ParamMode::default(),
            value: spec.default_value(),
            spec,
            status: ValidationStatus::NotValidated,
            config: ParameterConfig::default(),
            notifier: Notifier::new(),
        }
    }

    /// Create a boolean parameter
    pub fn boolean(name: &str, default: bool) -> Self {
        Self::seeded(name, BooleanSpec::new(default))
    }

    /// Create a bounded integer parameter
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the parameter
    /// * `default` - Default and initial value
    /// * `lower` - Smallest valid value
    /// * `upper` - Largest valid value
    ///
    /// # Returns
    ///
    /// A parameter whose status reflects the validity of `default`. Invalid
    /// defaults are logged, not rejected.
    pub fn integer(name: &str, default: i64, lower: i64, upper: i64) -> Self {
        Self::seeded(name, IntegerSpec::new(default, lower, upper))
    }

    /// Create a bounded real parameter
    pub fn real(name: &str, default: f64, lower: f64, upper: f64) -> Self {
        Self::seeded(name, RealSpec::new(default, lower, upper))
    }

    /// Create an option parameter
    ///
    /// # Examples
    ///
    /// ```
    /// use capeparam_rs::parameters::Parameter;
    ///
    /// let method = Parameter::option("Method", "TP", ["TP", "PH", "TV"], true);
    /// assert_eq!(method.value().as_str(), Some("TP"));
    /// assert_eq!(method.restricted_to_list(), Some(true));
    /// ```
    pub fn option<I, S>(name: &str, default: &str, options: I, restricted: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::seeded(name, OptionSpec::new(default, options, restricted))
    }

    /// Create an array parameter holding the item defaults
    pub fn array(name: &str, spec: ArraySpec) -> Self {
        Self::seeded(name, spec)
    }

    /// Create a fully specified parameter
    ///
    /// A value that cannot take the shape of `spec` is replaced by the default.
    /// Failures are logged and leave the parameter `Invalid`; use
    /// [`Parameter::try_with_spec`] to get them as errors instead.
    pub fn with_spec(
        name: &str,
        description: &str,
        value: ParamValue,
        spec: impl Into<KindSpec>,
        mode: ParamMode,
    ) -> Self {
        let (parameter, failure) = Self::initialise(name, description, value, spec.into(), mode);
        if let Some(message) = failure {
            warn!(parameter = %name, %message, "parameter initialised with an invalid value");
        }
        parameter
    }

    /// Create a fully specified parameter, failing if the value is not valid
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::FailedInitialisation`] if `value` cannot take
    /// the shape of `spec` or does not validate against it.
    pub fn try_with_spec(
        name: &str,
        description: &str,
        value: ParamValue,
        spec: impl Into<KindSpec>,
        mode: ParamMode,
    ) -> Result<Self, ParameterError> {
        match Self::initialise(name, description, value, spec.into(), mode) {
            (parameter, None) => Ok(parameter),
            (_, Some(message)) => Err(ParameterError::FailedInitialisation {
                name: name.to_string(),
                message,
            }),
        }
    }

    fn initialise(
        name: &str,
        description: &str,
        value: ParamValue,
        spec: KindSpec,
        mode: ParamMode,
    ) -> (Self, Option<String>) {
        let mut parameter = Self::new(name, spec).with_description(description).with_mode(mode);

        let mut failure = None;
        match conform_for(name, &parameter.spec, value) {
            Ok(value) => parameter.value = value,
            Err(err) => failure = Some(err.to_string()),
        }

        let outcome = parameter.spec.validate(&parameter.value);
        parameter.status = outcome.status();
        if failure.is_some() {
            parameter.status = ValidationStatus::Invalid;
        } else if !outcome.is_valid() {
            failure = Some(outcome.message().to_string());
        }

        (parameter, failure)
    }

    fn seeded(name: &str, spec: impl Into<KindSpec>) -> Self {
        let mut parameter = Self::new(name, spec);
        let outcome = parameter.spec.validate(&parameter.value);
        if !outcome.is_valid() {
            warn!(parameter = %name, message = outcome.message(), "default value is invalid");
        }
        parameter.status = outcome.status();
        parameter
    }

    /// Set the description without firing an event
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the mode without firing an event
    pub fn with_mode(mut self, mode: ParamMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the policy configuration
    pub fn with_config(mut self, config: ParameterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        let old = std::mem::replace(&mut self.name, name.to_string());
        self.notifier.emit(&ParameterEvent::NameChanged {
            old,
            new: self.name.clone(),
        });
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        let old = std::mem::replace(&mut self.description, description.to_string());
        self.notifier.emit(&ParameterEvent::DescriptionChanged {
            name: self.name.clone(),
            old,
            new: self.description.clone(),
        });
    }

    pub fn mode(&self) -> ParamMode {
        self.mode
    }

    /// Change the mode; always succeeds for an owned parameter
    pub fn set_mode(&mut self, mode: ParamMode) -> Result<(), ParameterError> {
        let old = std::mem::replace(&mut self.mode, mode);
        self.notifier.emit(&ParameterEvent::ModeChanged {
            name: self.name.clone(),
            old,
            new: mode,
        });
        Ok(())
    }

    pub fn kind(&self) -> ParameterKind {
        self.spec.kind()
    }

    pub fn specification(&self) -> &KindSpec {
        &self.spec
    }

    pub fn config(&self) -> &ParameterConfig {
        &self.config
    }

    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    pub fn default_value(&self) -> ParamValue {
        self.spec.default_value()
    }

    pub fn lower_bound(&self) -> Option<ParamValue> {
        self.spec.lower_bound()
    }

    pub fn upper_bound(&self) -> Option<ParamValue> {
        self.spec.upper_bound()
    }

    pub fn option_list(&self) -> Option<&[String]> {
        self.spec.option_list()
    }

    pub fn restricted_to_list(&self) -> Option<bool> {
        self.spec.restricted_to_list()
    }

    /// Unit label of a real parameter
    pub fn unit(&self) -> Option<&str> {
        self.spec.unit()
    }

    pub fn validation_status(&self) -> ValidationStatus {
        self.status
    }

    /// Store a new value and fire `ValueChanged`
    ///
    /// # Arguments
    ///
    /// * `value` - The new value; it is coerced to the parameter's kind
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value was stored. Numeric values outside the bounds are
    /// stored and only reported by `validate()`, unless the configuration
    /// rejects them.
    ///
    /// # Errors
    ///
    /// * [`ParameterError::KindMismatch`] if the value cannot be coerced
    /// * [`ParameterError::InvalidValue`] for a value outside a restricted option
    ///   list or an array of the wrong size
    pub fn set_value(&mut self, value: impl Into<ParamValue>) -> Result<(), ParameterError> {
        let value = conform_for(&self.name, &self.spec, value.into())?;
        if let Some(message) = rejection_message(&self.spec, &self.config, &value) {
            debug!(parameter = %self.name, %value, %message, "value rejected");
            return Err(ParameterError::InvalidValue {
                name: self.name.clone(),
                message,
            });
        }

        let old = std::mem::replace(&mut self.value, value);
        self.invalidate();
        debug!(parameter = %self.name, old = %old, new = %self.value, "value changed");

        self.notifier.emit(&ParameterEvent::ValueChanged {
            name: self.name.clone(),
            old,
            new: self.value.clone(),
        });
        Ok(())
    }

    /// Parse host-entered text per the specification and store the result
    pub fn set_value_text(&mut self, text: &str) -> Result<(), ParameterError> {
        let value = parse_value(&self.spec, text)?;
        self.set_value(value)
    }

    /// Validate the current value
    ///
    /// Updates the validation status and fires `Validated`, even when the status
    /// does not change.
    pub fn validate(&mut self) -> Validation {
        let outcome = self.spec.validate(&self.value);
        let old_status = std::mem::replace(&mut self.status, outcome.status());
        debug!(
            parameter = %self.name,
            status = ?self.status,
            message = outcome.message(),
            "validated"
        );

        self.notifier.emit(&ParameterEvent::Validated {
            name: self.name.clone(),
            old_status,
            new_status: self.status,
            message: outcome.message().to_string(),
        });
        outcome
    }

    /// Validate a candidate value without storing it
    pub fn validate_value(&self, value: &ParamValue) -> Validation {
        self.spec.validate(value)
    }

    /// Restore the default value and fire `Reset`
    pub fn reset(&mut self) {
        self.value = self.spec.default_value();
        self.invalidate();
        debug!(parameter = %self.name, value = %self.value, "reset to default");

        self.notifier.emit(&ParameterEvent::Reset {
            name: self.name.clone(),
        });
    }

    /// Replace the default value and fire `DefaultValueChanged`
    ///
    /// An option default outside a restricted list is rejected.
    pub fn set_default_value(
        &mut self,
        value: impl Into<ParamValue>,
    ) -> Result<(), ParameterError> {
        let value = conform_for(&self.name, &self.spec, value.into())?;
        if let Some(message) = rejection_message(&self.spec, &self.config, &value) {
            return Err(ParameterError::InvalidValue {
                name: self.name.clone(),
                message,
            });
        }

        let old = self.spec.default_value();
        if !self.spec.set_default(value.clone()) {
            return Err(ParameterError::InvalidValue {
                name: self.name.clone(),
                message: messages::KIND_MISMATCH.to_string(),
            });
        }
        debug!(parameter = %self.name, old = %old, new = %value, "default value changed");

        self.notifier.emit(&ParameterEvent::DefaultValueChanged {
            name: self.name.clone(),
            old,
            new: value,
        });
        Ok(())
    }

    /// Replace the lower bound of an integer or real parameter
    pub fn set_lower_bound(&mut self, bound: impl Into<ParamValue>) -> Result<(), ParameterError> {
        let (old, new) = self.replace_bound(Capability::LowerBound, bound.into())?;
        self.notifier.emit(&ParameterEvent::LowerBoundChanged {
            name: self.name.clone(),
            old,
            new,
        });
        Ok(())
    }

    /// Replace the upper bound of an integer or real parameter
    pub fn set_upper_bound(&mut self, bound: impl Into<ParamValue>) -> Result<(), ParameterError> {
        let (old, new) = self.replace_bound(Capability::UpperBound, bound.into())?;
        self.notifier.emit(&ParameterEvent::UpperBoundChanged {
            name: self.name.clone(),
            old,
            new,
        });
        Ok(())
    }

    fn replace_bound(
        &mut self,
        side: Capability,
        bound: ParamValue,
    ) -> Result<(ParamValue, ParamValue), ParameterError> {
        let name = self.name.clone();
        let mismatch = |expected: ParameterKind, found: ParameterKind| {
            ParameterError::KindMismatch {
                name: name.clone(),
                expected,
                found,
            }
        };

        let (old, new) = match &mut self.spec {
            KindSpec::Integer(spec) => {
                let number = bound
                    .to_int()
                    .ok_or_else(|| mismatch(ParameterKind::Integer, bound.kind()))?;
                let slot = if side == Capability::LowerBound {
                    &mut spec.bounds.lower
                } else {
                    &mut spec.bounds.upper
                };
                let old = std::mem::replace(slot, number);
                (ParamValue::Int(old), ParamValue::Int(number))
            }
            KindSpec::Real(spec) => {
                let number = bound
                    .to_real()
                    .ok_or_else(|| mismatch(ParameterKind::Real, bound.kind()))?;
                let slot = if side == Capability::LowerBound {
                    &mut spec.bounds.lower
                } else {
                    &mut spec.bounds.upper
                };
                let old = std::mem::replace(slot, number);
                (ParamValue::Real(old), ParamValue::Real(number))
            }
            _ => {
                return Err(ParameterError::CapabilityUnavailable {
                    name: self.name.clone(),
                    capability: side,
                })
            }
        };

        self.invalidate();
        debug!(parameter = %self.name, bound = %side, old = %old, new = %new, "bound changed");
        Ok((old, new))
    }

    /// Replace the option list of an option parameter
    pub fn set_option_list<I, S>(&mut self, options: I) -> Result<(), ParameterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let KindSpec::Option(spec) = &mut self.spec else {
            return Err(ParameterError::CapabilityUnavailable {
                name: self.name.clone(),
                capability: Capability::OptionList,
            });
        };

        let new: Vec<String> = options.into_iter().map(Into::into).collect();
        let old = std::mem::replace(&mut spec.options, new.clone());
        self.invalidate();
        debug!(parameter = %self.name, options = ?new, "option list changed");

        self.notifier.emit(&ParameterEvent::OptionListChanged {
            name: self.name.clone(),
            old,
            new,
        });
        Ok(())
    }

    /// Set whether the value must be one of the options
    pub fn set_restricted_to_list(&mut self, restricted: bool) -> Result<(), ParameterError> {
        let KindSpec::Option(spec) = &mut self.spec else {
            return Err(ParameterError::CapabilityUnavailable {
                name: self.name.clone(),
                capability: Capability::RestrictedToList,
            });
        };

        let old = std::mem::replace(&mut spec.restricted, restricted);
        self.invalidate();

        self.notifier.emit(&ParameterEvent::RestrictedToListChanged {
            name: self.name.clone(),
            old,
            new: restricted,
        });
        Ok(())
    }

    /// Register a listener for one kind of event
    pub fn subscribe(
        &mut self,
        kind: ParameterEventKind,
        listener: Listener<ParameterEvent>,
    ) -> SubscriptionId {
        self.notifier.subscribe(kind, listener)
    }

    /// Register a listener for every event
    pub fn subscribe_all(&mut self, listener: Listener<ParameterEvent>) -> SubscriptionId {
        self.notifier.subscribe_all(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn invalidate(&mut self) {
        if self.config.invalidate_on_change {
            self.status = ValidationStatus::NotValidated;
        }
    }
}

impl CapeParameter for Parameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        Parameter::set_name(self, name)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: &str) {
        Parameter::set_description(self, description)
    }

    fn mode(&self) -> ParamMode {
        self.mode
    }

    fn set_mode(&mut self, mode: ParamMode) -> Result<(), ParameterError> {
        Parameter::set_mode(self, mode)
    }

    fn specification(&self) -> KindSpec {
        self.spec.clone()
    }

    fn value(&self) -> ParamValue {
        self.value.clone()
    }

    fn set_value(&mut self, value: ParamValue) -> Result<(), ParameterError> {
        Parameter::set_value(self, value)
    }

    fn validation_status(&self) -> ValidationStatus {
        self.status
    }

    fn validate(&mut self) -> Validation {
        Parameter::validate(self)
    }

    fn reset(&mut self) {
        Parameter::reset(self)
    }

    fn set_default_value(&mut self, value: ParamValue) -> Result<(), ParameterError> {
        Parameter::set_default_value(self, value)
    }

    fn set_lower_bound(&mut self, bound: ParamValue) -> Result<(), ParameterError> {
        Parameter::set_lower_bound(self, bound)
    }

    fn set_upper_bound(&mut self, bound: ParamValue) -> Result<(), ParameterError> {
        Parameter::set_upper_bound(self, bound)
    }

    fn set_option_list(&mut self, options: Vec<String>) -> Result<(), ParameterError> {
        Parameter::set_option_list(self, options)
    }

    fn set_restricted_to_list(&mut self, restricted: bool) -> Result<(), ParameterError> {
        Parameter::set_restricted_to_list(self, restricted)
    }

    fn subscribe(
        &mut self,
        kind: ParameterEventKind,
        listener: Listener<ParameterEvent>,
    ) -> SubscriptionId {
        self.notifier.subscribe(kind, listener)
    }

    fn subscribe_all(&mut self, listener: Listener<ParameterEvent>) -> SubscriptionId {
        self.notifier.subscribe_all(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn clone_boxed(&self) -> Box<dyn CapeParameter> {
        Box::new(self.clone())
    }

    fn kind(&self) -> ParameterKind {
        self.spec.kind()
    }

    fn validate_value(&self, value: &ParamValue) -> Validation {
        self.spec.validate(value)
    }
}
