//! # ordinals
//!
//! English ordinal formatting for integers.
//!
//! ## Overview
//!
//! - **Digit ordinals**: `1st`, `12th`, `101st`
//! - **Word ordinals**: `first`, `twelfth`, `one hundred first`, up to
//!   `2^53 - 1`
//!
//! Every function is pure; all vocabulary lives in `const` tables, so the
//! formatters can be called from any number of threads.
//!
//! ## Feature Flags
//!
//! - `digit`: Digit ordinals (`digit_ordinal`, `DigitOrdinal`)
//! - `word`: Word ordinals (`word_ordinal`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordinals::prelude::*;
//!
//! assert_eq!(digit_ordinal(22), "22nd");
//! assert_eq!(word_ordinal(22).unwrap(), "twenty-second");
//! assert_eq!(103_u16.to_word_ordinal().unwrap(), "one hundred third");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the formatters enabled by the active features, the
/// [`Ordinal`](crate::ordinal::Ordinal) trait and the error types.
///
/// # Usage
///
/// ```rust
/// use ordinals::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordinal::*;
}

pub mod ordinal;
