use std::any::type_name;
use std::fmt::{self, Display};
use std::panic;

/// Raised when an unwrap-style accessor is called on the wrong variant.
///
/// The message has the form `"<context>: <payload type>"`, where the context is a
/// fixed phrase for [`unwrap`](crate::Outcome::unwrap) and
/// [`unwrap_err`](crate::Outcome::unwrap_err), or the caller's message for
/// [`expect`](crate::Outcome::expect) and [`expect_err`](crate::Outcome::expect_err).
///
/// # Examples
///
/// ```
/// use throwless::UnwrapError;
///
/// let err = UnwrapError::unwrap_on_failure::<String>();
/// assert_eq!(err.message(), "Called unwrap on a Failure value: alloc::string::String");
///
/// let err = UnwrapError::expect::<i32>("config must load");
/// assert_eq!(err.to_string(), "config must load: i32");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Creates an error with an arbitrary message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `unwrap` was called on a `Failure` holding an `E`.
    #[inline]
    pub fn unwrap_on_failure<E: ?Sized>() -> Self {
        Self::with_context::<E>("Called unwrap on a Failure value")
    }

    /// `unwrap_err` was called on a `Success` holding a `T`.
    #[inline]
    pub fn unwrap_err_on_success<T: ?Sized>() -> Self {
        Self::with_context::<T>("Called unwrap_err on a Success value")
    }

    /// `expect(msg)` was called on a `Failure` holding an `E`.
    #[inline]
    pub fn expect<E: ?Sized>(msg: &str) -> Self {
        Self::with_context::<E>(msg)
    }

    /// `expect_err(msg)` was called on a `Success` holding a `T`.
    #[inline]
    pub fn expect_err<T: ?Sized>(msg: &str) -> Self {
        Self::with_context::<T>(msg)
    }

    fn with_context<P: ?Sized>(context: &str) -> Self {
        Self::new(format!("{}: {}", context, type_name::<P>()))
    }

    /// The human-readable description, including the offending type name.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Unwinds with `self` as the panic payload.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        log_unwrap_failure!(self.message);
        panic::panic_any(self)
    }
}

impl Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UnwrapError {}
