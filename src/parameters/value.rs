//! Parameter values, kinds and modes
//!
//! This module provides [`ParamValue`], the tagged union every parameter stores
//! its current and default value in, together with the [`ParameterKind`] tag and
//! the [`ParamMode`] a parameter is exposed with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of parameter kinds
///
/// The declaration order follows the CAPE-OPEN parameter type numbering
/// (real = 0, integer = 1, option = 2, boolean = 3, array = 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Bounded floating point value
    Real,

    /// Bounded integer value
    Integer,

    /// String value, optionally restricted to a list of options
    Option,

    /// Boolean flag
    Boolean,

    /// Fixed-size array of values, each with its own specification
    Array,
}

impl ParameterKind {
    /// Lower-case name of the kind, as used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Integer => "integer",
            Self::Option => "option",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a parameter is read, written or both by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParamMode {
    /// Set by the host before a calculation
    Input,

    /// Produced by the component during a calculation
    Output,

    /// Both set by the host and updated by the component
    #[default]
    InputOutput,
}

impl fmt::Display for ParamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
            Self::InputOutput => f.write_str("input/output"),
        }
    }
}

/// The value held by a parameter
///
/// Each variant corresponds to exactly one [`ParameterKind`]. Values handed to a
/// parameter are coerced to the parameter's kind with [`ParamValue::coerce`]
/// before they are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Boolean value
    Bool(bool),

    /// Integer value
    Int(i64),

    /// Real value
    Real(#[serde(with = "serde_real")] f64),

    /// Option (string) value
    Option(String),

    /// Array value
    Array(Vec<ParamValue>),
}

impl ParamValue {
    /// The kind this value belongs to
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Bool(_) => ParameterKind::Boolean,
            Self::Int(_) => ParameterKind::Integer,
            Self::Real(_) => ParameterKind::Real,
            Self::Option(_) => ParameterKind::Option,
            Self::Array(_) => ParameterKind::Array,
        }
    }

    /// The boolean held by a `Bool` value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The integer held by an `Int` value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// The real held by a `Real` value
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(number) => Some(*number),
            _ => None,
        }
    }

    /// The string held by an `Option` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Option(text) => Some(text),
            _ => None,
        }
    }

    /// The elements held by an `Array` value
    pub fn as_array(&self) -> Option<&[ParamValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Interpret the value as a boolean
    ///
    /// Numbers convert to `true` when non-zero and the strings `"true"` and
    /// `"false"` are accepted in any letter case.
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            Self::Int(number) => Some(*number != 0),
            Self::Real(number) => Some(*number != 0.0),
            Self::Option(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            Self::Array(_) => None,
        }
    }

    /// Interpret the value as an integer
    ///
    /// Reals convert only when they hold an integral value representable as `i64`.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            Self::Real(number)
                if number.is_finite()
                    && number.fract() == 0.0
                    && *number >= i64::MIN as f64
                    && *number < i64::MAX as f64 =>
            {
                Some(*number as i64)
            }
            _ => None,
        }
    }

    /// Interpret the value as a real
    pub fn to_real(&self) -> Option<f64> {
        match self {
            Self::Real(number) => Some(*number),
            Self::Int(number) => Some(*number as f64),
            _ => None,
        }
    }

    /// Coerce the value to the given kind
    ///
    /// # Arguments
    ///
    /// * `kind` - The kind the value should be converted to
    ///
    /// # Returns
    ///
    /// The converted value, or `None` if the value has no representation in `kind`.
    /// Scalars convert to options through their textual form; arrays only convert
    /// to arrays (element shapes are checked by the array specification).
    ///
    /// # Examples
    ///
    /// ```
    /// use capeparam_rs::parameters::{ParamValue, ParameterKind};
    ///
    /// assert_eq!(ParamValue::Int(3).coerce(ParameterKind::Real), Some(ParamValue::Real(3.0)));
    /// assert_eq!(ParamValue::Real(2.5).coerce(ParameterKind::Integer), None);
    /// assert_eq!(ParamValue::Int(0).coerce(ParameterKind::Boolean), Some(ParamValue::Bool(false)));
    /// ```
    pub fn coerce(self, kind: ParameterKind) -> Option<ParamValue> {
        match kind {
            ParameterKind::Boolean => self.to_bool().map(Self::Bool),
            ParameterKind::Integer => self.to_int().map(Self::Int),
            ParameterKind::Real => self.to_real().map(Self::Real),
            ParameterKind::Option => match self {
                Self::Option(text) => Some(Self::Option(text)),
                Self::Array(_) => None,
                scalar => Some(Self::Option(scalar.to_string())),
            },
            ParameterKind::Array => match self {
                Self::Array(items) => Some(Self::Array(items)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(f, "{}", flag),
            Self::Int(number) => write!(f, "{}", number),
            Self::Real(number) => write!(f, "{}", number),
            Self::Option(text) => f.write_str(text),
            Self::Array(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Serde helpers for reals that may be infinite or NaN
///
/// JSON has no literal for these, so finite reals are written as numbers and the
/// others as the strings `"inf"`, `"-inf"` and `"NaN"`.
pub(crate) mod serde_real {
    use serde::de::{self, Deserializer, Unexpected};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S>(number: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if number.is_finite() {
            serializer.serialize_f64(*number)
        } else if number.is_nan() {
            serializer.serialize_str("NaN")
        } else if number.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(number) => Ok(number),
            Repr::Text(text) => text.parse::<f64>().map_err(|_| {
                de::Error::invalid_value(
                    Unexpected::Str(&text),
                    &r#"a number, "inf", "-inf" or "NaN""#,
                )
            }),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for ParamValue {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for ParamValue {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<f64> for ParamValue {
    fn from(number: f64) -> Self {
        Self::Real(number)
    }
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        Self::Option(text.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(text: String) -> Self {
        Self::Option(text)
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(items: Vec<ParamValue>) -> Self {
        Self::Array(items)
    }
}
