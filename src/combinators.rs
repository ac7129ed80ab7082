use log::debug;
use serde::{Deserialize, Serialize};

use crate::Diagnostic;

/// Value of a fallible operation: either the value it produced or the error
/// describing why it produced none.
///
/// An `Outcome` is never changed in place. Every transformation consumes it and
/// returns a new one, and each one only looks at the variant it is named
/// after: `map`/`flat_map` leave a `Failure` alone, `map_error`/`flat_map_error`
/// leave a `Success` alone.
///
/// ```
/// use outcome::numbers::{calculate_factors, FactorError};
/// use outcome::Outcome;
///
/// let count = Outcome::success(4).flat_map(calculate_factors);
/// assert_eq!(count, Outcome::success(3));
///
/// let prime = Outcome::<i64, FactorError>::success(7).flat_map(calculate_factors);
/// assert_eq!(prime, Outcome::failure(FactorError::IsPrime));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),

    /// The operation failed, the error says why.
    Failure(E),
}

impl<T, E> Outcome<T, E>
where
    E: Diagnostic,
{
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Runs `operation` once and captures what it returns. An `Err` becomes a
    /// `Failure` and does not travel any further.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let parsed = Outcome::from_throwing(|| "42".parse::<i64>());
    /// assert_eq!(parsed, Outcome::success(42));
    ///
    /// let failed = Outcome::from_throwing(|| "forty two".parse::<i64>());
    /// assert!(failed.is_failure());
    /// ```
    pub fn from_throwing<O>(operation: O) -> Self
    where
        O: FnOnce() -> Result<T, E>,
    {
        match operation() {
            Ok(value) => Self::Success(value),
            Err(error) => {
                debug!("Outcome::from_throwing - captured failure: {}", error.describe());
                Self::Failure(error)
            }
        }
    }

    /// Hands the value back to `?`-based code, the inverse of
    /// [`Outcome::from_throwing`]. A `Failure` comes back as `Err` with exactly
    /// the error it holds.
    pub fn unwrap(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => {
                debug!("Outcome::unwrap - raising failure: {}", error.describe());
                Err(error)
            }
        }
    }

    pub fn map<U, O>(self, transform: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains another fallible step. Whatever `transform` returns is the result,
    /// so nothing ends up as `Outcome<Outcome<U, E>, E>`.
    pub fn flat_map<U, O>(self, transform: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_error<F, O>(self, transform: O) -> Outcome<T, F>
    where
        F: Diagnostic,
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(transform(error)),
        }
    }

    /// Gives a failure a chance to recover, or to turn into a different
    /// failure.
    pub fn flat_map_error<F, O>(self, transform: O) -> Outcome<T, F>
    where
        F: Diagnostic,
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => transform(error),
        }
    }
}

impl<T, E> Outcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Drops the error, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Drops the value, if any.
    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    pub fn unwrap_or_else<O>(self, recover: O) -> T
    where
        O: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => recover(error),
        }
    }

    /// Lets `observe` look at a failure, e.g. to log it, and returns `self`
    /// untouched.
    pub fn inspect_error<O>(self, observe: O) -> Self
    where
        O: FnOnce(&E),
    {
        if let Self::Failure(ref error) = self {
            observe(error);
        }
        self
    }
}
