//! The integer abstraction shared by both formatters.
//!
//! [`Ordinal`] is implemented for every primitive integer type, so callers can
//! pass `u8`, `i64`, `usize` and friends directly, or use the extension
//! methods:
//!
//! ```rust
//! use ordinals::ordinal::Ordinal;
//!
//! assert_eq!(22_u8.to_digit_ordinal(), "22nd");
//! assert_eq!(22_u8.to_word_ordinal().unwrap(), "twenty-second");
//! ```

use std::fmt;

#[cfg(feature = "word")]
use super::error::OrdinalError;

/// An integer that can be rendered as an English ordinal.
///
/// # Implementing Ordinal
///
/// Only the two conversions are required; the rendering methods are
/// provided.
///
/// ```rust
/// use ordinals::ordinal::Ordinal;
/// use std::fmt;
///
/// #[derive(Debug, Clone, Copy)]
/// struct Rank(u16);
///
/// impl fmt::Display for Rank {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(formatter, "{}", self.0)
///     }
/// }
///
/// impl Ordinal for Rank {
///     fn to_i128(self) -> Option<i128> {
///         Some(i128::from(self.0))
///     }
///
///     fn hundreds_remainder(self) -> i16 {
///         (self.0 % 100) as i16
///     }
/// }
///
/// assert_eq!(Rank(3).to_digit_ordinal(), "3rd");
/// ```
pub trait Ordinal: Copy + fmt::Display {
    /// Widens the value to `i128`, or `None` when it does not fit.
    fn to_i128(self) -> Option<i128>;

    /// Returns `self % 100` with the sign of `self` (truncating remainder).
    fn hundreds_remainder(self) -> i16;

    /// Renders the value with its digit suffix, e.g. `"101st"`.
    #[cfg(feature = "digit")]
    fn to_digit_ordinal(self) -> String {
        super::digit::digit_ordinal(self)
    }

    /// Spells the value out as an ordinal phrase, e.g. `"one hundred first"`.
    ///
    /// # Errors
    ///
    /// Returns [`OrdinalError::OutOfRange`] under the same conditions as
    /// [`word_ordinal`](super::word_ordinal).
    #[cfg(feature = "word")]
    fn to_word_ordinal(self) -> Result<String, OrdinalError> {
        super::word::word_ordinal(self)
    }
}

macro_rules! impl_ordinal_lossless {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Ordinal for $integer {
                #[inline]
                fn to_i128(self) -> Option<i128> {
                    Some(i128::from(self))
                }

                #[inline]
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap
                )]
                fn hundreds_remainder(self) -> i16 {
                    (self % 100) as i16
                }
            }
        )*
    };
}

macro_rules! impl_ordinal_fallible {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Ordinal for $integer {
                #[inline]
                fn to_i128(self) -> Option<i128> {
                    i128::try_from(self).ok()
                }

                #[inline]
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap
                )]
                fn hundreds_remainder(self) -> i16 {
                    (self % 100) as i16
                }
            }
        )*
    };
}

impl_ordinal_lossless!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
impl_ordinal_fallible!(isize, usize, u128);
