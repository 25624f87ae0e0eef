//! Extension trait for turning a standard `Result` into an [`Outcome`].
//!
//! The conversion is always spelled out by the caller; nothing in the crate
//! converts a native error on its own.
//!
//! # Examples
//!
//! ```
//! use throwless::traits::IntoOutcome;
//!
//! let parsed = "not a number"
//!     .parse::<i32>()
//!     .into_outcome()
//!     .map_err(|e| e.to_string());
//! assert!(parsed.is_failure());
//! ```

use crate::outcome::Outcome;

/// Converts `Result<T, E>` into `Outcome<T, E>` at the point where a
/// combinator chain begins.
pub trait IntoOutcome<T, E> {
    /// `Ok` becomes `Success` and `Err` becomes `Failure`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}
