//! A two-variant success/failure value, [`Outcome`], with the combinators to
//! build, inspect and chain it.
//!
//! Errors carried by an outcome implement [`Diagnostic`], usually derived:
//!
//! ```
//! use outcome::{Diagnostic, Outcome};
//!
//! #[derive(Debug, PartialEq, Diagnostic)]
//! enum FetchError {
//!     #[diagnostic("url is malformed")]
//!     BadUrl,
//! }
//!
//! let unread: Outcome<u32, FetchError> = Outcome::failure(FetchError::BadUrl);
//! let message = unread
//!     .map(|count| format!("{} unread messages", count))
//!     .unwrap_or_else(|e| e.describe());
//!
//! assert_eq!(message, "url is malformed");
//! ```

// Lets `#[derive(Diagnostic)]` refer to `::outcome` from inside this crate.
extern crate self as outcome;

mod combinators;
mod convert;
mod diagnostic;
pub mod numbers;

pub use crate::combinators::Outcome;
pub use crate::diagnostic::Diagnostic;
pub use outcome_macros::Diagnostic;
