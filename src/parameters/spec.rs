//! Kind-specific parameter specifications
//!
//! A specification is the shape metadata governing which values a parameter
//! accepts: bounds for numeric kinds, the option list for option parameters and
//! one item specification per element for arrays. Every specification can
//! validate a candidate value without touching any parameter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parameters::bounds::{BoundCheck, BoundedScalar, Bounds};
use crate::parameters::status::{messages, Validation};
use crate::parameters::value::{ParamValue, ParameterKind};

/// Errors raised when a value cannot take the shape of a specification
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConformError {
    #[error("expected a {expected} value, got {found}")]
    KindMismatch {
        expected: ParameterKind,
        found: ParameterKind,
    },

    #[error("expected {expected} array elements, got {found}")]
    SizeMismatch { expected: usize, found: usize },
}

fn bound_validation(check: BoundCheck) -> Validation {
    match check {
        BoundCheck::Within => Validation::valid(),
        BoundCheck::BelowLower => Validation::invalid(messages::BELOW_LOWER_BOUND),
        BoundCheck::AboveUpper => Validation::invalid(messages::ABOVE_UPPER_BOUND),
        BoundCheck::NotANumber => Validation::invalid(messages::NOT_A_NUMBER),
    }
}

/// Specification of a boolean parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanSpec {
    /// Value restored by `reset()`
    pub default: bool,
}

impl BooleanSpec {
    pub fn new(default: bool) -> Self {
        Self { default }
    }

    /// Every boolean is valid
    pub fn validate(&self, value: &ParamValue) -> Validation {
        match value.to_bool() {
            Some(_) => Validation::valid(),
            None => Validation::invalid(messages::KIND_MISMATCH),
        }
    }
}

/// Specification of an integer parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerSpec {
    /// Value restored by `reset()`
    pub default: i64,

    /// Inclusive range of valid values
    pub bounds: Bounds<i64>,
}

impl IntegerSpec {
    /// Create an integer specification
    ///
    /// # Examples
    ///
    /// ```
    /// use capeparam_rs::parameters::{IntegerSpec, ParamValue};
    ///
    /// let spec = IntegerSpec::new(5, 1, 100);
    /// assert!(spec.validate(&ParamValue::Int(50)).is_valid());
    /// assert_eq!(spec.validate(&ParamValue::Int(0)).message(), "Value below the Lower Bound.");
    /// ```
    pub fn new(default: i64, lower: i64, upper: i64) -> Self {
        Self {
            default,
            bounds: Bounds::new(lower, upper),
        }
    }

    /// An integer specification accepting the whole `i64` range
    pub fn unbounded(default: i64) -> Self {
        Self {
            default,
            bounds: Bounds::unbounded(),
        }
    }

    pub fn lower_bound(&self) -> i64 {
        self.bounds.lower
    }

    pub fn upper_bound(&self) -> i64 {
        self.bounds.upper
    }

    /// Validate a raw integer against the bounds
    pub fn check(&self, value: i64) -> Validation {
        bound_validation(self.bounds.check(value))
    }

    pub fn validate(&self, value: &ParamValue) -> Validation {
        match value.to_int() {
            Some(number) => self.check(number),
            None => Validation::invalid(messages::KIND_MISMATCH),
        }
    }
}

/// Specification of a real parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealSpec {
    /// Value restored by `reset()`
    #[serde(with = "crate::parameters::value::serde_real")]
    pub default: f64,

    /// Inclusive range of valid values
    pub bounds: Bounds<f64>,

    /// Unit label shown to users, e.g. `"Pa"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RealSpec {
    /// Create a real specification
    pub fn new(default: f64, lower: f64, upper: f64) -> Self {
        Self {
            default,
            bounds: Bounds::new(lower, upper),
            unit: None,
        }
    }

    /// A real specification accepting every non-NaN value
    pub fn unbounded(default: f64) -> Self {
        Self {
            default,
            bounds: Bounds::unbounded(),
            unit: None,
        }
    }

    /// Attach a unit label
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn lower_bound(&self) -> f64 {
        self.bounds.lower
    }

    pub fn upper_bound(&self) -> f64 {
        self.bounds.upper
    }

    /// Validate a raw real against the bounds
    pub fn check(&self, value: f64) -> Validation {
        bound_validation(self.bounds.check(value))
    }

    pub fn validate(&self, value: &ParamValue) -> Validation {
        match value.to_real() {
            Some(number) => self.check(number),
            None => Validation::invalid(messages::KIND_MISMATCH),
        }
    }
}

/// Specification of an option parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Value restored by `reset()`
    pub default: String,

    /// Known options, in display order
    pub options: Vec<String>,

    /// Whether values outside `options` are rejected
    pub restricted: bool,
}

impl OptionSpec {
    /// Create an option specification
    ///
    /// # Examples
    ///
    /// ```
    /// use capeparam_rs::parameters::OptionSpec;
    ///
    /// let spec = OptionSpec::new("TP", ["TP", "PH", "TV"], true);
    /// assert!(spec.contains("PH"));
    /// assert!(!spec.check("XX").is_valid());
    /// ```
    pub fn new<I, S>(default: &str, options: I, restricted: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default: default.to_string(),
            options: options.into_iter().map(Into::into).collect(),
            restricted,
        }
    }

    /// An option specification without a list, accepting any string
    pub fn unrestricted(default: &str) -> Self {
        Self {
            default: default.to_string(),
            options: Vec::new(),
            restricted: false,
        }
    }

    /// Whether `value` is one of the options (exact, case-sensitive match)
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }

    /// Validate a raw string against the option list
    pub fn check(&self, value: &str) -> Validation {
        if self.restricted && !self.contains(value) {
            Validation::invalid(messages::NOT_IN_OPTION_LIST)
        } else {
            Validation::valid()
        }
    }

    pub fn validate(&self, value: &ParamValue) -> Validation {
        match value.clone().coerce(ParameterKind::Option) {
            Some(ParamValue::Option(text)) => self.check(&text),
            _ => Validation::invalid(messages::KIND_MISMATCH),
        }
    }
}

/// Specification of an array parameter
///
/// Each element has its own specification. A matrix is an array whose items are
/// arrays of equal size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArraySpec {
    /// One specification per element
    pub items: Vec<KindSpec>,
}

impl ArraySpec {
    pub fn new(items: Vec<KindSpec>) -> Self {
        Self { items }
    }

    /// An array of `len` elements sharing one specification
    pub fn uniform(item: impl Into<KindSpec>, len: usize) -> Self {
        let item = item.into();
        Self {
            items: vec![item; len],
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_specs(&self) -> &[KindSpec] {
        &self.items
    }

    /// The shared shape of the items, if every item is an array of the same size
    fn nested(&self) -> Option<&ArraySpec> {
        let mut inner = self.items.iter().map(KindSpec::as_array);
        let first = inner.next()??;
        let size = first.size();
        for item in inner {
            match item {
                Some(array) if array.size() == size => {}
                _ => return None,
            }
        }
        Some(first)
    }

    /// Number of dimensions of the array
    pub fn num_dimensions(&self) -> usize {
        1 + self.nested().map_or(0, ArraySpec::num_dimensions)
    }

    /// Size of each dimension, outermost first
    pub fn size(&self) -> Vec<usize> {
        let mut size = vec![self.items.len()];
        if let Some(inner) = self.nested() {
            size.extend(inner.size());
        }
        size
    }

    /// The element defaults, in order
    pub fn default_value(&self) -> Vec<ParamValue> {
        self.items.iter().map(KindSpec::default_value).collect()
    }

    /// Validate every element against its own specification
    ///
    /// The outcome carries one message per element.
    pub fn validate(&self, value: &ParamValue) -> Validation {
        let Some(elements) = value.as_array() else {
            return Validation::invalid(messages::KIND_MISMATCH);
        };
        if elements.len() != self.items.len() {
            return Validation::invalid(messages::ARRAY_SIZE_MISMATCH);
        }

        Validation::from_items(
            elements
                .iter()
                .zip(&self.items)
                .map(|(element, spec)| spec.validate(element)),
        )
    }

    /// Coerce an array value to this shape, element by element
    pub fn conform(&self, value: ParamValue) -> Result<ParamValue, ConformError> {
        let elements = match value {
            ParamValue::Array(elements) => elements,
            other => {
                return Err(ConformError::KindMismatch {
                    expected: ParameterKind::Array,
                    found: other.kind(),
                })
            }
        };
        if elements.len() != self.items.len() {
            return Err(ConformError::SizeMismatch {
                expected: self.items.len(),
                found: elements.len(),
            });
        }

        let conformed = elements
            .into_iter()
            .zip(&self.items)
            .map(|(element, spec)| spec.conform(element))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParamValue::Array(conformed))
    }
}

/// The specification of a parameter, one variant per kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KindSpec {
    Boolean(BooleanSpec),
    Integer(IntegerSpec),
    Real(RealSpec),
    Option(OptionSpec),
    Array(ArraySpec),
}

impl KindSpec {
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Boolean(_) => ParameterKind::Boolean,
            Self::Integer(_) => ParameterKind::Integer,
            Self::Real(_) => ParameterKind::Real,
            Self::Option(_) => ParameterKind::Option,
            Self::Array(_) => ParameterKind::Array,
        }
    }

    /// The value `reset()` restores
    pub fn default_value(&self) -> ParamValue {
        match self {
            Self::Boolean(spec) => ParamValue::Bool(spec.default),
            Self::Integer(spec) => ParamValue::Int(spec.default),
            Self::Real(spec) => ParamValue::Real(spec.default),
            Self::Option(spec) => ParamValue::Option(spec.default.clone()),
            Self::Array(spec) => ParamValue::Array(spec.default_value()),
        }
    }

    /// Validate a candidate value without storing it
    pub fn validate(&self, value: &ParamValue) -> Validation {
        match self {
            Self::Boolean(spec) => spec.validate(value),
            Self::Integer(spec) => spec.validate(value),
            Self::Real(spec) => spec.validate(value),
            Self::Option(spec) => spec.validate(value),
            Self::Array(spec) => spec.validate(value),
        }
    }

    /// Coerce a value to the kind (and, for arrays, the shape) of this specification
    pub fn conform(&self, value: ParamValue) -> Result<ParamValue, ConformError> {
        match self {
            Self::Array(spec) => spec.conform(value),
            _ => {
                let expected = self.kind();
                let found = value.kind();
                value
                    .coerce(expected)
                    .ok_or(ConformError::KindMismatch { expected, found })
            }
        }
    }

    /// Replace the default with an already conformed value
    ///
    /// Returns `false` if the value does not have this specification's shape.
    pub(crate) fn set_default(&mut self, value: ParamValue) -> bool {
        match (self, value) {
            (Self::Boolean(spec), ParamValue::Bool(flag)) => spec.default = flag,
            (Self::Integer(spec), ParamValue::Int(number)) => spec.default = number,
            (Self::Real(spec), ParamValue::Real(number)) => spec.default = number,
            (Self::Option(spec), ParamValue::Option(text)) => spec.default = text,
            (Self::Array(spec), ParamValue::Array(elements)) => {
                if elements.len() != spec.items.len() {
                    return false;
                }
                for (item, element) in spec.items.iter_mut().zip(elements) {
                    if !item.set_default(element) {
                        return false;
                    }
                }
            }
            _ => return false,
        }
        true
    }

    /// Lower bound of a numeric specification
    pub fn lower_bound(&self) -> Option<ParamValue> {
        match self {
            Self::Integer(spec) => Some(spec.bounds.lower.into_value()),
            Self::Real(spec) => Some(spec.bounds.lower.into_value()),
            _ => None,
        }
    }

    /// Upper bound of a numeric specification
    pub fn upper_bound(&self) -> Option<ParamValue> {
        match self {
            Self::Integer(spec) => Some(spec.bounds.upper.into_value()),
            Self::Real(spec) => Some(spec.bounds.upper.into_value()),
            _ => None,
        }
    }

    /// Option list of an option specification
    pub fn option_list(&self) -> Option<&[String]> {
        match self {
            Self::Option(spec) => Some(&spec.options),
            _ => None,
        }
    }

    /// Restriction flag of an option specification
    pub fn restricted_to_list(&self) -> Option<bool> {
        match self {
            Self::Option(spec) => Some(spec.restricted),
            _ => None,
        }
    }

    /// Unit label of a real specification
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Real(spec) => spec.unit.as_deref(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArraySpec> {
        match self {
            Self::Array(spec) => Some(spec),
            _ => None,
        }
    }
}

impl From<BooleanSpec> for KindSpec {
    fn from(spec: BooleanSpec) -> Self {
        Self::Boolean(spec)
    }
}

impl From<IntegerSpec> for KindSpec {
    fn from(spec: IntegerSpec) -> Self {
        Self::Integer(spec)
    }
}

impl From<RealSpec> for KindSpec {
    fn from(spec: RealSpec) -> Self {
        Self::Real(spec)
    }
}

impl From<OptionSpec> for KindSpec {
    fn from(spec: OptionSpec) -> Self {
        Self::Option(spec)
    }
}

impl From<ArraySpec> for KindSpec {
    fn from(spec: ArraySpec) -> Self {
        Self::Array(spec)
    }
}
