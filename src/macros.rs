//! Macros for building outcomes and the crate's internal logging hooks.
//!
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression or block and
//!   converts it into an [`Outcome`](crate::Outcome).
//!
//! The logging hooks emit `tracing` events when the `tracing` feature is enabled
//! and expand to nothing otherwise.

/// Wraps a `Result`-producing expression or block into an [`Outcome`](crate::Outcome).
///
/// # Examples
///
/// ```
/// use throwless::outcome;
///
/// let parsed = outcome!("42".parse::<i32>());
/// assert_eq!(parsed.unwrap(), 42);
///
/// let parsed = outcome!({
///     let raw = "x";
///     raw.parse::<i32>()
/// });
/// assert!(parsed.is_failure());
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from_result($expr)
    };
}

#[cfg(feature = "tracing")]
macro_rules! log_swallowed {
    ($operation:literal) => {
        ::tracing::debug!(
            operation = $operation,
            "callback panicked; panic swallowed and chain continues"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_swallowed {
    ($operation:literal) => {};
}

#[cfg(feature = "tracing")]
macro_rules! log_unwrap_failure {
    ($message:expr) => {
        ::tracing::error!(reason = %$message, "invalid unwrap for current variant")
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_unwrap_failure {
    ($message:expr) => {};
}
