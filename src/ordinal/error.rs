//! Error types for the ordinal formatters.
//!
//! Only [`word_ordinal`](super::word_ordinal) can fail. Digit ordinals accept
//! every integer.

use thiserror::Error;

/// Why a value cannot be spelled out as an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeViolation {
    /// The value is below zero.
    #[error("value must not be negative")]
    Negative,

    /// The value is above `2^53 - 1`, the largest exact integer of a double.
    #[error("value exceeds the maximum exact integer 9007199254740991")]
    ExceedsSafeInteger,

    /// The value needs a numeral group larger than quadrillion.
    #[error("magnitude 10^{magnitude} needs a numeral group beyond quadrillion")]
    UnsupportedMagnitude {
        /// `floor(log10(value))`.
        magnitude: u32,
    },
}

/// Errors returned by the word ordinal formatter.
///
/// There is a single kind, [`OrdinalError::OutOfRange`]; the attached
/// [`RangeViolation`] tells which bound was crossed.
///
/// # Examples
///
/// ```rust
/// use ordinals::ordinal::{OrdinalError, RangeViolation};
///
/// let error = OrdinalError::OutOfRange {
///     value: -1,
///     violation: RangeViolation::Negative,
/// };
/// assert_eq!(
///     error.to_string(),
///     "ordinal input -1 is out of range: value must not be negative"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrdinalError {
    /// The input lies outside the supported range.
    #[error("ordinal input {value} is out of range: {violation}")]
    OutOfRange {
        /// The rejected input. Unsigned inputs above `i128::MAX` are
        /// reported as `i128::MAX`.
        value: i128,
        /// The bound that was crossed.
        violation: RangeViolation,
    },
}

impl OrdinalError {
    #[cfg(feature = "word")]
    pub(crate) const fn out_of_range(value: i128, violation: RangeViolation) -> Self {
        Self::OutOfRange { value, violation }
    }

    /// Returns the rejected input.
    pub const fn value(&self) -> i128 {
        match self {
            Self::OutOfRange { value, .. } => *value,
        }
    }

    /// Returns the violated bound.
    pub const fn violation(&self) -> RangeViolation {
        match self {
            Self::OutOfRange { violation, .. } => *violation,
        }
    }

    /// Returns `true` for [`OrdinalError::OutOfRange`].
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_display() {
        let error = OrdinalError::OutOfRange {
            value: -42,
            violation: RangeViolation::Negative,
        };
        assert_eq!(
            format!("{error}"),
            "ordinal input -42 is out of range: value must not be negative"
        );
    }

    #[test]
    fn test_exceeds_safe_integer_display() {
        let error = OrdinalError::OutOfRange {
            value: 9_007_199_254_740_992,
            violation: RangeViolation::ExceedsSafeInteger,
        };
        assert_eq!(
            format!("{error}"),
            "ordinal input 9007199254740992 is out of range: \
             value exceeds the maximum exact integer 9007199254740991"
        );
    }

    #[test]
    fn test_unsupported_magnitude_display() {
        let violation = RangeViolation::UnsupportedMagnitude { magnitude: 18 };
        assert_eq!(
            format!("{violation}"),
            "magnitude 10^18 needs a numeral group beyond quadrillion"
        );
    }

    #[test]
    fn test_accessors() {
        let error = OrdinalError::OutOfRange {
            value: 7,
            violation: RangeViolation::ExceedsSafeInteger,
        };
        assert_eq!(error.value(), 7);
        assert_eq!(error.violation(), RangeViolation::ExceedsSafeInteger);
        assert!(error.is_out_of_range());
    }

    #[test]
    fn test_error_equality() {
        let first = OrdinalError::OutOfRange {
            value: -1,
            violation: RangeViolation::Negative,
        };
        let second = OrdinalError::OutOfRange {
            value: -1,
            violation: RangeViolation::Negative,
        };
        let third = OrdinalError::OutOfRange {
            value: -2,
            violation: RangeViolation::Negative,
        };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
