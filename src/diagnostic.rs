use std::fmt::{Debug, Display};

/// Capability every error carried by [`Outcome`](crate::Outcome) has to expose.
///
/// The only requirement is a human readable description. Caller-defined enums
/// usually get it through `#[derive(Diagnostic)]`, which also generates
/// `Display` and `std::error::Error` from `#[diagnostic("...")]` messages.
///
/// The derive only accepts enums:
///
/// ```compile_fail
/// #[derive(Debug, outcome::Diagnostic)]
/// struct Refused;
/// ```
///
/// with at least one variant:
///
/// ```compile_fail
/// #[derive(Debug, outcome::Diagnostic)]
/// enum Never {}
/// ```
///
/// each carrying a message:
///
/// ```compile_fail
/// #[derive(Debug, outcome::Diagnostic)]
/// enum FetchError {
///     BadUrl,
/// }
/// ```
///
/// and holding nothing, or a single field:
///
/// ```compile_fail
/// #[derive(Debug, outcome::Diagnostic)]
/// enum FetchError {
///     #[diagnostic("server refused the request")]
///     Refused(u16, String),
/// }
/// ```
///
/// The same shapes with a message compile:
///
/// ```
/// #[derive(Debug, outcome::Diagnostic)]
/// enum FetchError {
///     #[diagnostic("url is malformed")]
///     BadUrl,
///     #[diagnostic("server refused the request")]
///     Refused(u16),
/// }
///
/// assert_eq!(FetchError::Refused(503).to_string(), "server refused the request: 503");
/// ```
pub trait Diagnostic: Debug + Display {
    /// Human readable description of what went wrong.
    fn describe(&self) -> String {
        self.to_string()
    }
}

macro_rules! implement_diagnostic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Diagnostic for $ty {}
        )*
    };
}

implement_diagnostic!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    std::convert::Infallible,
    Box<dyn std::error::Error + Send + Sync>,
    String,
);

impl<E> Diagnostic for &E
where
    E: Diagnostic + ?Sized,
{
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl Diagnostic for anyhow::Error {
    /// Includes the whole context chain, outermost first.
    fn describe(&self) -> String {
        format!("{:#}", self)
    }
}
