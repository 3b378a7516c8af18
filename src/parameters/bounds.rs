//! Numeric bounds for integer and real specifications
//!
//! Bounds never reject values on their own: a value outside the bounds is stored
//! and only reported by validation. [`Bounds::check`] tells which side was
//! violated so that validation can produce the matching message.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parameters::value::ParamValue;

/// A scalar type that can be bounded
pub trait BoundedScalar: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// The smallest representable bound, meaning "no lower bound"
    const LOWEST: Self;

    /// The largest representable bound, meaning "no upper bound"
    const HIGHEST: Self;

    /// Whether the value is NaN
    fn is_nan(self) -> bool {
        false
    }

    /// Wrap the scalar in a [`ParamValue`]
    fn into_value(self) -> ParamValue;
}

impl BoundedScalar for i64 {
    const LOWEST: Self = i64::MIN;
    const HIGHEST: Self = i64::MAX;

    fn into_value(self) -> ParamValue {
        ParamValue::Int(self)
    }
}

impl BoundedScalar for f64 {
    const LOWEST: Self = f64::NEG_INFINITY;
    const HIGHEST: Self = f64::INFINITY;

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn into_value(self) -> ParamValue {
        ParamValue::Real(self)
    }
}

/// Where a value lies relative to its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundCheck {
    /// `lower <= value <= upper`
    Within,

    /// `value < lower`
    BelowLower,

    /// `value > upper`
    AboveUpper,

    /// The value is NaN and compares with nothing
    NotANumber,
}

/// Lower and upper bound of a numeric specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Smallest valid value
    pub lower: T,

    /// Largest valid value
    pub upper: T,
}

impl<T: BoundedScalar + Serialize> Serialize for Bounds<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Bounds", 2)?;

        // Open ends are written as null so that infinities survive JSON
        let lower = (self.lower != T::LOWEST).then_some(self.lower);
        let upper = (self.upper != T::HIGHEST).then_some(self.upper);
        state.serialize_field("lower", &lower)?;
        state.serialize_field("upper", &upper)?;

        state.end()
    }
}

impl<'de, T: BoundedScalar + DeserializeOwned> Deserialize<'de> for Bounds<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BoundsHelper<T> {
            lower: Option<T>,
            upper: Option<T>,
        }

        let helper = BoundsHelper::<T>::deserialize(deserializer)?;

        Ok(Bounds {
            lower: helper.lower.unwrap_or(T::LOWEST),
            upper: helper.upper.unwrap_or(T::HIGHEST),
        })
    }
}

impl<T: BoundedScalar> Default for Bounds<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: BoundedScalar> Bounds<T> {
    /// Create bounds from a lower and an upper value
    ///
    /// Inverted bounds are accepted; no value validates against them.
    ///
    /// # Examples
    ///
    /// ```
    /// use capeparam_rs::parameters::Bounds;
    ///
    /// let bounds = Bounds::new(1_i64, 100);
    /// assert_eq!(bounds.lower, 1);
    /// assert_eq!(bounds.upper, 100);
    /// ```
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Bounds spanning the whole range of `T`
    pub fn unbounded() -> Self {
        Self {
            lower: T::LOWEST,
            upper: T::HIGHEST,
        }
    }

    /// Bounds with only a lower limit
    pub fn lower_only(lower: T) -> Self {
        Self {
            lower,
            upper: T::HIGHEST,
        }
    }

    /// Bounds with only an upper limit
    pub fn upper_only(upper: T) -> Self {
        Self {
            lower: T::LOWEST,
            upper,
        }
    }

    /// Classify a value against the bounds
    ///
    /// The lower bound is checked first, so a value violating inverted bounds
    /// on both sides reports [`BoundCheck::BelowLower`].
    pub fn check(&self, value: T) -> BoundCheck {
        if value.is_nan() {
            BoundCheck::NotANumber
        } else if value < self.lower {
            BoundCheck::BelowLower
        } else if value > self.upper {
            BoundCheck::AboveUpper
        } else {
            BoundCheck::Within
        }
    }

    /// Check if a value is within the bounds
    pub fn contains(&self, value: T) -> bool {
        self.check(value) == BoundCheck::Within
    }

    /// Check if the bounds are inverted (lower > upper)
    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }

    /// Check if a lower limit is set
    pub fn has_lower_bound(&self) -> bool {
        self.lower != T::LOWEST
    }

    /// Check if an upper limit is set
    pub fn has_upper_bound(&self) -> bool {
        self.upper != T::HIGHEST
    }
}
