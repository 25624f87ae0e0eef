use std::any::type_name;
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::DefaultValueProvider;
use crate::types::UnwrapError;

/// Success-or-failure container with combinator semantics.
///
/// `Outcome<T, E>` is exactly one of `Success(T)` or `Failure(E)`. Combinators never
/// mutate the instance they are called on: every transforming operation consumes
/// `self` and hands back a new `Outcome` (or a plain value when the chain ends).
///
/// The payloads are unconstrained. `Outcome<Option<i32>, ()>::Success(None)` is a
/// success; the variant tag, not the payload, carries the meaning.
///
/// # Flattening
///
/// A transform either returns a plain value or opts into short-circuiting by returning
/// an `Outcome` itself. The two cases are separate methods:
///
/// | Transform returns | success side | failure side |
/// |---|---|---|
/// | plain value, auto-wrapped | [`map`](Self::map) | [`map_err`](Self::map_err) |
/// | `Outcome`, returned as-is | [`and_then`](Self::and_then) | [`or_else`](Self::or_else) |
///
/// An already nested `Outcome<Outcome<U, E>, E>` collapses with [`flatten`](Self::flatten).
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` derives `Serialize` and `Deserialize` using
/// serde's externally tagged enum representation.
///
/// # Examples
///
/// ```
/// use throwless::Outcome;
///
/// let doubled = Outcome::<i32, &str>::success(21)
///     .and_then(|x| Outcome::success(x * 2))
///     .unwrap();
/// assert_eq!(doubled, 42);
///
/// let recovered = Outcome::<i32, &str>::failure("boom").unwrap_or_else(|_| 42);
/// assert_eq!(recovered, 42);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let outcome = Outcome::<i32, String>::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let outcome = Outcome::<(), &str>::failure("missing field");
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if this is a `Success`.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if this is a `Success` whose value satisfies `predicate`.
    ///
    /// A panic raised by `predicate` is caught and reported as `false`; it never
    /// reaches the caller. On `Failure` the predicate is not called.
    ///
    /// The process panic hook still runs for a caught panic, so with the default
    /// hook a "thread panicked at" line is printed to stderr.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::success(42);
    /// assert!(outcome.is_success_and(|v| *v == 42));
    /// assert!(!outcome.is_success_and(|_| panic!("predicate blew up")));
    /// ```
    #[must_use]
    pub fn is_success_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => panic::catch_unwind(AssertUnwindSafe(|| predicate(value)))
                .unwrap_or_else(|_| {
                    log_swallowed!("is_success_and");
                    false
                }),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose error satisfies `predicate`.
    ///
    /// Mirrors [`is_success_and`](Self::is_success_and): a panicking predicate yields
    /// `false`, and on `Success` the predicate is not called. The panic hook still
    /// runs for a caught panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failure("timeout");
    /// assert!(outcome.is_failure_and(|e| e.starts_with("time")));
    /// ```
    #[must_use]
    pub fn is_failure_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => panic::catch_unwind(AssertUnwindSafe(|| predicate(error)))
                .unwrap_or_else(|_| {
                    log_swallowed!("is_failure_and");
                    false
                }),
        }
    }

    /// Returns the success value, or `default` on `Failure`.
    ///
    /// `default` is evaluated eagerly by the caller; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) to compute it lazily.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(7).unwrap_or(0), 7);
    /// assert_eq!(Outcome::<i32, &str>::failure("e").unwrap_or(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// The closure's return value is handed back as-is, not re-wrapped.
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => op(error),
        }
    }

    /// Returns the success value, or asks `provider` for a placeholder.
    ///
    /// On `Failure` the provider is keyed by the error's type name as reported by
    /// [`std::any::type_name`]. `None` means the provider has no mapping for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::{BasicDefaultValueProvider, Outcome};
    ///
    /// let provider = BasicDefaultValueProvider;
    ///
    /// let ok = Outcome::<i64, String>::success(42);
    /// assert_eq!(ok.unwrap_or_default(&provider), Some(42));
    ///
    /// // `String` is a recognized type name, so the provider answers.
    /// let err = Outcome::<i64, String>::failure("boom".to_string());
    /// assert_eq!(err.unwrap_or_default(&provider), Some(0));
    /// ```
    #[must_use]
    pub fn unwrap_or_default<P>(self, provider: &P) -> Option<T>
    where
        P: DefaultValueProvider<T> + ?Sized,
    {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => provider.default_value(type_name::<E>()),
        }
    }

    /// Maps the success value with `f`, wrapping the result in a new `Success`.
    ///
    /// A `Failure` is passed through with the same error and `f` is never called.
    /// When `f` itself decides between success and failure, use
    /// [`and_then`](Self::and_then) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the error with `f`, wrapping the result in a new `Failure`.
    ///
    /// A `Success` is passed through untouched and `f` is never called. When `f`
    /// may recover into a success, use [`or_else`](Self::or_else) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let outcome = Outcome::<i32, u16>::failure(404);
    /// let mapped = outcome.map_err(|code| format!("HTTP {}", code));
    /// assert_eq!(mapped, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation that itself returns an `Outcome`.
    ///
    /// On `Success` the `Outcome` produced by `f` is returned unchanged, so a
    /// `Failure` from `f` short-circuits the chain without double wrapping.
    /// On `Failure`, `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32, &'static str> {
    ///     if input % 2 == 0 {
    ///         Outcome::success(input)
    ///     } else {
    ///         Outcome::failure("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).and_then(parse_even), Outcome::Success(4));
    /// assert_eq!(Outcome::success(3).and_then(parse_even), Outcome::Failure("not even"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `op` on `Failure` and returns the `Outcome` it produces.
    ///
    /// `op` can recover into a `Success` or replace the error. A `Success` is
    /// returned untouched and `op` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failure("cache miss");
    /// let recovered: Outcome<i32, String> = outcome.or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Dispatches to exactly one of the two branches and returns its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let label = Outcome::<i32, &str>::success(42).match_with(
    ///     |v| format!("value {}", v),
    ///     |e| format!("error {}", e),
    /// );
    /// assert_eq!(label, "value 42");
    /// ```
    #[inline]
    pub fn match_with<U, OkF, ErrF>(self, ok_fn: OkF, err_fn: ErrF) -> U
    where
        OkF: FnOnce(T) -> U,
        ErrF: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => ok_fn(value),
            Self::Failure(error) => err_fn(error),
        }
    }

    /// Calls `f` with a reference to the success value, then returns `self`.
    ///
    /// `self` comes back even when `f` panics; the panic is caught here and the
    /// chain continues. On `Failure`, `f` is never called.
    ///
    /// The process panic hook still runs for a caught panic, so with the default
    /// hook a "thread panicked at" line is printed to stderr.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::<i32, &str>::success(42).inspect(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(outcome, Outcome::Success(42));
    /// ```
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            if panic::catch_unwind(AssertUnwindSafe(|| f(value))).is_err() {
                log_swallowed!("inspect");
            }
        }
        self
    }

    /// Calls `f` with a reference to the error, then returns `self`.
    ///
    /// Same guarantees as [`inspect`](Self::inspect), for the failure side.
    /// The panic hook still runs for a caught panic.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            if panic::catch_unwind(AssertUnwindSafe(|| f(error))).is_err() {
                log_swallowed!("inspect_err");
            }
        }
        self
    }

    /// Returns the success value, or an [`UnwrapError`] naming the error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let err = Outcome::<i32, &str>::failure("boom").try_unwrap().unwrap_err();
    /// assert_eq!(err.message(), "Called unwrap on a Failure value: &str");
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(UnwrapError::unwrap_on_failure::<E>()),
        }
    }

    /// Returns the error, or an [`UnwrapError`] naming the success type.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        match self {
            Self::Success(_) => Err(UnwrapError::unwrap_err_on_success::<T>()),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Like [`try_unwrap`](Self::try_unwrap), with `msg` as the error context.
    #[inline]
    pub fn try_expect(self, msg: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(UnwrapError::expect::<E>(msg)),
        }
    }

    /// Like [`try_unwrap_err`](Self::try_unwrap_err), with `msg` as the error context.
    #[inline]
    pub fn try_expect_err(self, msg: &str) -> Result<E, UnwrapError> {
        match self {
            Self::Success(_) => Err(UnwrapError::expect_err::<T>(msg)),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Failure` with an [`UnwrapError`] as the panic payload, so it can be
    /// recovered with [`std::panic::catch_unwind`] and `downcast_ref::<UnwrapError>()`.
    /// Use [`try_unwrap`](Self::try_unwrap) to get the error as a value instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::{Outcome, UnwrapError};
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).unwrap(), 42);
    ///
    /// let caught = std::panic::catch_unwind(|| Outcome::<i32, &str>::failure("e").unwrap());
    /// let payload = caught.unwrap_err();
    /// assert!(payload.downcast_ref::<UnwrapError>().is_some());
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics on `Success` with an [`UnwrapError`] payload naming the value's type.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(err) => err.raise(),
        }
    }

    /// Returns the success value, panicking with `msg` as context on `Failure`.
    ///
    /// # Panics
    ///
    /// Panics on `Failure` with an [`UnwrapError`] whose message is
    /// `"<msg>: <error type>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).expect("should not fail"), 42);
    /// ```
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    /// Returns the error, panicking with `msg` as context on `Success`.
    ///
    /// # Panics
    ///
    /// Panics on `Success` with an [`UnwrapError`] whose message is
    /// `"<msg>: <value type>"`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self.try_expect_err(msg) {
            Ok(error) => error,
            Err(err) => err.raise(),
        }
    }

    /// Returns the success value without the caller having checked the variant.
    ///
    /// Reaching this on `Failure` is a caller bug. It is not undefined behaviour:
    /// the variant is still checked and the call panics with the same
    /// [`UnwrapError`] as [`unwrap`](Self::unwrap).
    ///
    /// # Panics
    ///
    /// Panics on `Failure`.
    #[track_caller]
    pub fn unwrap_unchecked(self) -> T {
        self.unwrap()
    }

    /// Returns the error without the caller having checked the variant.
    ///
    /// Panics on `Success` with the same [`UnwrapError`] as
    /// [`unwrap_err`](Self::unwrap_err).
    #[track_caller]
    pub fn unwrap_err_unchecked(self) -> E {
        self.unwrap_err()
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Extracts the success value, discarding any error.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).into_success(), Some(42));
    /// assert_eq!(Outcome::<i32, &str>::failure("e").into_success(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, discarding any success value.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).into_result(), Ok(42));
    /// assert_eq!(Outcome::<i32, &str>::failure("e").into_result(), Err("e"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a standard `Result`, `Ok` becoming `Success` and `Err` becoming `Failure`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// `Success(Success(v))` becomes `Success(v)`, and an inner or outer `Failure`
    /// becomes that `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use throwless::Outcome;
    ///
    /// let nested = Outcome::<i32, &str>::success(21).map(|x| Outcome::success(x * 2));
    /// assert_eq!(nested.flatten(), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(std::convert::identity)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
