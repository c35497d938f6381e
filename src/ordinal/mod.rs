//! English ordinal formatting.
//!
//! This module renders integers as English ordinals, either with a digit
//! suffix or spelled out in words.
//!
//! # Overview
//!
//! - [`digit_ordinal`]: `21` becomes `"21st"` (feature `digit`)
//! - [`digit_suffix`]: the suffix alone, `"st"` (feature `digit`)
//! - [`DigitOrdinal`]: a display adapter for digit ordinals (feature `digit`)
//! - [`word_ordinal`]: `21` becomes `"twenty-first"` (feature `word`)
//! - [`Ordinal`]: the integer trait behind both, with extension methods
//!
//! # Examples
//!
//! ## Digit ordinals
//!
//! ```
//! use ordinals::ordinal::digit_ordinal;
//!
//! assert_eq!(digit_ordinal(1), "1st");
//! assert_eq!(digit_ordinal(12), "12th");
//! assert_eq!(digit_ordinal(101), "101st");
//! ```
//!
//! ## Word ordinals
//!
//! ```
//! use ordinals::ordinal::word_ordinal;
//!
//! assert_eq!(
//!     word_ordinal(32_010_002_400_u64).unwrap(),
//!     "thirty-two billion ten million two thousand four hundredth"
//! );
//! ```
//!
//! # Range
//!
//! Word ordinals cover `0..=2^53 - 1` ([`MAX_SAFE_INTEGER`]). Negative values,
//! larger values and values that would need a group name past quadrillion are
//! rejected with [`OrdinalError::OutOfRange`]. Digit ordinals accept any
//! integer.
//!
//! # Grammar
//!
//! ```text
//! n < 20          -> ordinal unit                  "thirteenth"
//! 20 <= n < 100   -> stem + "ieth" | stem + "y-" + ordinal unit
//! n >= 100        -> cardinal(leading) + " " + group
//!                    + ("th" | " " + ordinal(remainder))
//! ```

mod error;
mod integer;
mod tables;

#[cfg(feature = "digit")]
mod digit;
#[cfg(feature = "word")]
mod word;

pub use error::{OrdinalError, RangeViolation};
pub use integer::Ordinal;

#[cfg(feature = "digit")]
pub use digit::{DigitOrdinal, digit_ordinal, digit_suffix};
#[cfg(feature = "word")]
pub use word::{MAX_SAFE_INTEGER, word_ordinal};
