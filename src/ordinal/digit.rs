//! Digit ordinals: `1st`, `12th`, `101st`.
//!
//! The suffix depends only on `n % 100`:
//!
//! - [`digit_suffix`]: the suffix alone
//! - [`digit_ordinal`]: the number followed by its suffix
//! - [`DigitOrdinal`]: a [`Display`](fmt::Display) adapter that writes the
//!   same text without allocating

use std::fmt;

use super::integer::Ordinal;
use super::tables::DIGIT_SUFFIXES;

/// Returns the English ordinal suffix for `number`.
///
/// Values ending in 11, 12 and 13 take `th`; otherwise a last digit of 1, 2
/// or 3 takes `st`, `nd` or `rd`. Negative numbers use the truncating
/// remainder, so their suffix is always `th`.
///
/// # Examples
///
/// ```
/// use ordinals::ordinal::digit_suffix;
///
/// assert_eq!(digit_suffix(1), "st");
/// assert_eq!(digit_suffix(12), "th");
/// assert_eq!(digit_suffix(23), "rd");
/// assert_eq!(digit_suffix(113), "th");
/// ```
#[inline]
#[allow(clippy::cast_sign_loss)]
pub fn digit_suffix<N: Ordinal>(number: N) -> &'static str {
    let remainder = number.hundreds_remainder();
    let past_twenty = (remainder - 20) % 10;
    let index = if (1..=3).contains(&past_twenty) {
        past_twenty
    } else if (1..=3).contains(&remainder) {
        remainder
    } else {
        0
    };
    DIGIT_SUFFIXES[index as usize]
}

/// Renders `number` followed by its ordinal suffix.
///
/// Never fails; any integer, including negative ones, is accepted.
///
/// # Examples
///
/// ```
/// use ordinals::ordinal::digit_ordinal;
///
/// assert_eq!(digit_ordinal(11), "11th");
/// assert_eq!(digit_ordinal(21), "21st");
/// assert_eq!(digit_ordinal(111), "111th");
/// assert_eq!(digit_ordinal(121), "121st");
/// ```
#[inline]
pub fn digit_ordinal<N: Ordinal>(number: N) -> String {
    DigitOrdinal(number).to_string()
}

/// Displays the wrapped integer as a digit ordinal.
///
/// # Examples
///
/// ```
/// use ordinals::ordinal::DigitOrdinal;
///
/// let line = format!("finished {} of {}", DigitOrdinal(2_u32), 40);
/// assert_eq!(line, "finished 2nd of 40");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitOrdinal<N>(pub N);

impl<N: Ordinal> fmt::Display for DigitOrdinal<N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{}", self.0, digit_suffix(self.0))
    }
}
