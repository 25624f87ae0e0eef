//! Success/failure container with Rust-style combinators.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `throwless::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use throwless::Outcome;
//!
//! let total = Outcome::<i32, String>::success(21)
//!     .map(|x| x * 2)
//!     .inspect(|x| println!("doubled: {}", x))
//!     .and_then(|x| {
//!         if x > 0 {
//!             Outcome::success(x)
//!         } else {
//!             Outcome::failure("negative".to_string())
//!         }
//!     });
//!
//! assert_eq!(total.unwrap(), 42);
//! ```
//!
//! ## Recovering from failure
//!
//! ```
//! use throwless::Outcome;
//!
//! let wrapped = Outcome::<i32, &str>::failure("bad input")
//!     .map_err(|e| format!("wrapped: {}", e));
//! assert_eq!(wrapped.unwrap_err(), "wrapped: bad input");
//!
//! let value = Outcome::<i32, &str>::failure("boom").unwrap_or_else(|_| 42);
//! assert_eq!(value, 42);
//! ```
//!
//! ## Checked extraction
//!
//! ```
//! use throwless::Outcome;
//!
//! let err = Outcome::<i32, &str>::failure("e")
//!     .try_expect("custom msg")
//!     .unwrap_err();
//! assert!(err.message().contains("custom msg"));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`]
//! - `tracing`: events for swallowed callback panics and failed unwraps
//! - `full`: both of the above

#[macro_use]
mod macros;

/// Default-value lookup used by `unwrap_or_default`
pub mod defaults;
/// The `Outcome` container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Provider contract and std `Result` conversion
pub mod traits;
/// `UnwrapError` and shared collection types
pub mod types;

pub use defaults::{BasicDefaultValueProvider, TypeDefault};
pub use outcome::{partition, IntoIter, Iter, IterMut, Outcome};
pub use outcome::Outcome::{Failure, Success};
pub use traits::{DefaultValueProvider, IntoOutcome};
pub use types::{ErrorVec, UnwrapError};
