//! The [`Outcome`] container and its combinators.
//!
//! An [`Outcome<T, E>`] is either `Success(T)` or `Failure(E)`. Client code builds
//! one directly and chains combinators on it; each combinator returns a new
//! `Outcome` or ends the chain by extracting a plain value.
//!
//! # Key Components
//!
//! - [`Outcome`] - the two-variant container
//! - Iterator adapters over the success value, plus fail-fast collection
//! - [`partition`] for splitting a batch of outcomes without stopping early
//!
//! # Examples
//!
//! ```
//! use throwless::outcome::Outcome;
//!
//! let outcome: Outcome<i32, String> = Outcome::success(21);
//! assert_eq!(outcome.map(|x| x * 2).unwrap(), 42);
//!
//! let failed: Outcome<i32, &str> = Outcome::failure("boom");
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
