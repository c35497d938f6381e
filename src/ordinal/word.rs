//! Word ordinals: `"one thousand seven hundred twenty-ninth"`.
//!
//! A number is split into base-1000 groups (with hundreds handled as their
//! own group). Every group except the last nonzero one is spelled as a
//! cardinal; the last one carries the ordinal form. Two mutually recursive
//! renderers do the work:
//!
//! - `push_ordinal` writes the ordinal phrase of a value and delegates each
//!   leading group to `push_cardinal`
//! - `push_cardinal` writes the cardinal phrase of a leading group
//!
//! Zero-valued groups never appear in the output: the remainder after a
//! leading group is rendered directly, so `1_000_005` is
//! `"one million fifth"`.

use super::error::{OrdinalError, RangeViolation};
use super::integer::Ordinal;
use super::tables::{GROUPS, ORDINAL_UNITS, TENS_STEMS, UNITS};

/// The largest accepted input, `2^53 - 1`.
///
/// This is the largest integer a double-precision float represents exactly.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// `10^18`, the first value whose leading group would be named quintillion.
const VOCABULARY_LIMIT: i128 = 1_000_000_000_000_000_000;

/// Spells `number` out as an English ordinal phrase.
///
/// Accepts `0..=MAX_SAFE_INTEGER`. The output uses American style (no
/// "and"), hyphenates compound tens and puts the ordinal form on the last
/// nonzero group only.
///
/// # Errors
///
/// Returns [`OrdinalError::OutOfRange`] when `number`
///
/// - is negative ([`RangeViolation::Negative`]),
/// - is `10^18` or larger, which would need a group name past quadrillion
///   ([`RangeViolation::UnsupportedMagnitude`]),
/// - is above [`MAX_SAFE_INTEGER`] ([`RangeViolation::ExceedsSafeInteger`]).
///
/// # Examples
///
/// ```
/// use ordinals::ordinal::{RangeViolation, word_ordinal};
///
/// assert_eq!(word_ordinal(0).unwrap(), "zeroth");
/// assert_eq!(word_ordinal(21).unwrap(), "twenty-first");
/// assert_eq!(word_ordinal(1000).unwrap(), "one thousandth");
/// assert_eq!(
///     word_ordinal(1729).unwrap(),
///     "one thousand seven hundred twenty-ninth"
/// );
///
/// let error = word_ordinal(-1).unwrap_err();
/// assert_eq!(error.violation(), RangeViolation::Negative);
/// ```
pub fn word_ordinal<N: Ordinal>(number: N) -> Result<String, OrdinalError> {
    let value = validate(number).inspect_err(|error| {
        log::debug!("rejecting word ordinal input: {error}");
    })?;

    let mut phrase = String::new();
    push_ordinal(&mut phrase, value);
    log::trace!("rendered {value} as {phrase:?}");
    Ok(phrase)
}

fn validate<N: Ordinal>(number: N) -> Result<u64, OrdinalError> {
    let Some(wide) = number.to_i128() else {
        // Only unsigned values above i128::MAX land here, all of them 39 digits long.
        return Err(OrdinalError::out_of_range(
            i128::MAX,
            RangeViolation::UnsupportedMagnitude {
                magnitude: u128::MAX.ilog10(),
            },
        ));
    };

    if wide < 0 {
        return Err(OrdinalError::out_of_range(wide, RangeViolation::Negative));
    }
    if wide >= VOCABULARY_LIMIT {
        return Err(OrdinalError::out_of_range(
            wide,
            RangeViolation::UnsupportedMagnitude {
                magnitude: wide.ilog10(),
            },
        ));
    }

    u64::try_from(wide)
        .ok()
        .filter(|value| *value <= MAX_SAFE_INTEGER)
        .ok_or(OrdinalError::out_of_range(wide, RangeViolation::ExceedsSafeInteger))
}

/// Splits `value >= 100` into its leading group, the group's scale and the
/// group's name.
fn leading_group(value: u64) -> (u64, u64, &'static str) {
    let magnitude = value.ilog10();
    if magnitude < 3 {
        return (value / 100, 100, GROUPS[0]);
    }
    let group = magnitude / 3;
    let scale = 10_u64.pow(group * 3);
    (value / scale, scale, GROUPS[group as usize])
}

#[allow(clippy::cast_possible_truncation)]
fn push_ordinal(phrase: &mut String, value: u64) {
    match value {
        0..20 => phrase.push_str(ORDINAL_UNITS[value as usize]),
        20..100 => {
            phrase.push_str(TENS_STEMS[(value / 10 - 2) as usize]);
            match value % 10 {
                0 => phrase.push_str("ieth"),
                ones => {
                    phrase.push_str("y-");
                    phrase.push_str(ORDINAL_UNITS[ones as usize]);
                }
            }
        }
        _ => {
            let (leading, scale, name) = leading_group(value);
            push_cardinal(phrase, leading);
            phrase.push(' ');
            phrase.push_str(name);
            match value - leading * scale {
                0 => phrase.push_str("th"),
                remainder => {
                    phrase.push(' ');
                    push_ordinal(phrase, remainder);
                }
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn push_cardinal(phrase: &mut String, value: u64) {
    match value {
        0..20 => phrase.push_str(UNITS[value as usize]),
        20..100 => {
            phrase.push_str(TENS_STEMS[(value / 10 - 2) as usize]);
            phrase.push('y');
            let ones = value % 10;
            if ones != 0 {
                phrase.push('-');
                phrase.push_str(UNITS[ones as usize]);
            }
        }
        _ => {
            let (leading, scale, name) = leading_group(value);
            push_cardinal(phrase, leading);
            phrase.push(' ');
            phrase.push_str(name);
            let remainder = value - leading * scale;
            if remainder != 0 {
                phrase.push(' ');
                push_cardinal(phrase, remainder);
            }
        }
    }
}
