//! Traits at the seams of the crate.
//!
//! - [`DefaultValueProvider`]: the lookup consulted by
//!   [`Outcome::unwrap_or_default`](crate::Outcome::unwrap_or_default)
//! - [`IntoOutcome`]: explicit conversion from a standard `Result`
//!
//! # Examples
//!
//! ```
//! use throwless::traits::{DefaultValueProvider, IntoOutcome};
//! use throwless::Outcome;
//!
//! let outcome = "42".parse::<i32>().into_outcome();
//! assert_eq!(outcome.unwrap(), 42);
//!
//! let provider = |name: &str| (name == "i32").then_some(7);
//! assert_eq!(provider.default_value("i32"), Some(7));
//! ```

pub mod default_value;
pub mod into_outcome;

pub use default_value::DefaultValueProvider;
pub use into_outcome::IntoOutcome;
