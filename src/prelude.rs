//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use throwless::prelude::*;
//!
//! let outcome: Outcome<i32, &str> = Success(42);
//! assert!(outcome.is_success());
//! ```

pub use crate::outcome;

pub use crate::outcome::Outcome::{self, Failure, Success};
pub use crate::types::UnwrapError;

pub use crate::traits::{DefaultValueProvider, IntoOutcome};

pub use crate::defaults::BasicDefaultValueProvider;
