//! Validation status and validation outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed message phrasings reported by validation
///
/// Hosts pattern-match on these strings, so they must not change.
pub mod messages {
    /// The value satisfies its specification
    pub const VALID: &str = "Value is valid.";

    /// A numeric value is smaller than its lower bound
    pub const BELOW_LOWER_BOUND: &str = "Value below the Lower Bound.";

    /// A numeric value is greater than its upper bound
    pub const ABOVE_UPPER_BOUND: &str = "Value greater than upper bound.";

    /// An option value is missing from a restricted option list
    pub const NOT_IN_OPTION_LIST: &str = "Value is not in the option list.";

    /// A real value is NaN
    pub const NOT_A_NUMBER: &str = "Value is not a number.";

    /// An array value has a different number of elements than its specification
    pub const ARRAY_SIZE_MISMATCH: &str = "Array size does not match the declared dimensions.";

    /// A value has no representation in the parameter's kind
    pub const KIND_MISMATCH: &str = "Value does not match the parameter type.";

    /// Every parameter of a collection is valid
    pub const OBJECT_VALID: &str = "Object is valid.";
}

/// Outcome of the last call to `validate()` on a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// `validate()` has not been called yet
    #[default]
    NotValidated,

    /// The last `validate()` call failed
    Invalid,

    /// The last `validate()` call succeeded
    Valid,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotValidated => f.write_str("not validated"),
            Self::Invalid => f.write_str("invalid"),
            Self::Valid => f.write_str("valid"),
        }
    }
}

/// Result of validating a value against a specification
///
/// Scalar kinds produce a single message. Arrays produce one message per element
/// in [`Validation::messages`], and [`Validation::message`] reports the first
/// failing element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    valid: bool,
    message: String,
    messages: Vec<String>,
}

impl Validation {
    /// A successful validation with the standard message
    pub fn valid() -> Self {
        Self::with_message(true, messages::VALID)
    }

    /// A failed validation with the given message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with_message(false, message)
    }

    /// A validation outcome carrying a single message
    pub fn with_message(valid: bool, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            valid,
            messages: vec![message.clone()],
            message,
        }
    }

    /// Aggregate element outcomes into the outcome of an array
    ///
    /// The aggregate is valid iff every element is valid. An empty array is valid.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Validation>,
    {
        let mut valid = true;
        let mut first_failure = None;
        let mut messages = Vec::new();

        for item in items {
            if !item.valid {
                valid = false;
                if first_failure.is_none() {
                    first_failure = Some(item.message.clone());
                }
            }
            messages.push(item.message);
        }

        Self {
            valid,
            message: first_failure.unwrap_or_else(|| messages::VALID.to_string()),
            messages,
        }
    }

    /// Whether the value is valid
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The summary message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every message, one per element for arrays
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The status a parameter takes after this outcome
    pub fn status(&self) -> ValidationStatus {
        if self.valid {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        }
    }

    /// Split into the `(valid, message)` pair hosts expect
    pub fn into_parts(self) -> (bool, String) {
        (self.valid, self.message)
    }
}
