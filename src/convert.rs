use std::fmt::Display;

use crate::{Diagnostic, Outcome};

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Collects successes into `V`. The first failure stops the iteration and is
/// returned as is.
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        iter.into_iter()
            .map(Result::from)
            .collect::<Result<V, E>>()
            .into()
    }
}

impl<T, E> Outcome<T, E>
where
    E: std::error::Error + Diagnostic + Send + Sync + 'static,
{
    /// Moves the failure into `anyhow`, wrapped with `context`.
    pub fn context<C>(self, context: C) -> Outcome<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_error(|error| anyhow::Error::new(error).context(context))
    }

    /// Like [`Outcome::context`], `context` is only called on failure.
    pub fn with_context<C, O>(self, context: O) -> Outcome<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        O: FnOnce() -> C,
    {
        self.map_error(|error| anyhow::Error::new(error).context(context()))
    }
}
