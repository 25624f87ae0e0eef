//! Error and collection types shared across the crate.
//!
//! # Examples
//!
//! ```
//! use throwless::types::UnwrapError;
//!
//! let err = UnwrapError::unwrap_err_on_success::<u8>();
//! assert_eq!(err.message(), "Called unwrap_err on a Success value: u8");
//! ```
use smallvec::SmallVec;

pub mod unwrap_error;

pub use unwrap_error::*;

/// SmallVec-backed collection used when gathering errors from many outcomes.
///
/// Uses inline storage for one element, so the common single-failure batch
/// does not allocate.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
