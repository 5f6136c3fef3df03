//! Optional values and fallible results, with combinators that take the place of manual presence checks.
//!
//! [`Option`] and [`Result`](std::result::Result) are extended by [`OptionExt`] and [`ResultExt`]. [`Options`] is an
//! ordered sequence of optional values whose bulk operations only ever see the present elements.

/// Builds an [`Option`] from zero or one value: `opt!()` is `None`, `opt!(value)` is `Some(value)`.
///
/// Passing more than one value does not compile.
#[macro_export]
macro_rules! opt {
  () => { ::core::option::Option::None };
  ($value:expr $(,)?) => { ::core::option::Option::Some($value) };
}

pub mod error;
pub mod option;
pub mod result;
pub mod options;

pub use error::{BoxError, Error};
pub use option::{and, OptionExt};
pub use options::Options;
pub use result::{err, ok, ResultExt};

/// Result whose failure is an opaque [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
