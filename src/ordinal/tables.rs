//! Immutable English vocabulary used by the ordinal formatters.
//!
//! Every table is a plain `const` array; lookups are total over the index
//! ranges documented on each item.

/// Cardinal words for `0..20`.
#[cfg(feature = "word")]
pub(crate) const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Ordinal words for `0..20`, parallel to [`UNITS`].
#[cfg(feature = "word")]
pub(crate) const ORDINAL_UNITS: [&str; 20] = [
    "zeroth",
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
];

/// Stems for the tens digits `2..=9`, indexed by `digit - 2`.
///
/// A stem takes `"y"` for the cardinal (`twenty`), `"ieth"` for the ordinal
/// (`twentieth`) and `"y-"` before a unit word (`twenty-first`).
#[cfg(feature = "word")]
pub(crate) const TENS_STEMS: [&str; 8] = [
    "twent", "thirt", "fort", "fift", "sixt", "sevent", "eight", "ninet",
];

/// Group names. Index 0 is `hundred`; index `k >= 1` names `10^(3k)`.
#[cfg(feature = "word")]
pub(crate) const GROUPS: [&str; 6] = [
    "hundred",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
];

/// Digit suffixes indexed by the last significant digit (0 = `th`).
#[cfg(feature = "digit")]
pub(crate) const DIGIT_SUFFIXES: [&str; 4] = ["th", "st", "nd", "rd"];

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    #[cfg(feature = "digit")]
    fn test_digit_suffixes_start_with_th() {
        assert_eq!(DIGIT_SUFFIXES, ["th", "st", "nd", "rd"]);
    }

    #[test]
    #[cfg(feature = "word")]
    fn test_ordinal_units_end_in_th_past_third() {
        assert_eq!(&ORDINAL_UNITS[1..4], ["first", "second", "third"]);
        for ordinal in &ORDINAL_UNITS[4..] {
            assert!(ordinal.ends_with("th"), "{ordinal}");
        }
    }

    #[test]
    #[cfg(feature = "word")]
    fn test_teen_ordinals_append_th() {
        for index in 13..20 {
            assert_eq!(ORDINAL_UNITS[index], format!("{}th", UNITS[index]));
        }
    }

    #[test]
    #[cfg(feature = "word")]
    fn test_groups_end_at_quadrillion() {
        assert_eq!(GROUPS.first(), Some(&"hundred"));
        assert_eq!(GROUPS.last(), Some(&"quadrillion"));
    }
}
