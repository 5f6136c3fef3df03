use std::error::Error as StdError;

use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error carried by a failed [`Result`](crate::Result).
#[derive(Debug, Error)]
pub enum Error {
  /// Stored in place of a missing error, so that a failed result always has an error object.
  #[error("result is not ok, but it's ok")]
  NotOk,
  #[error(transparent)]
  Other(BoxError),
}

impl Error {
  #[inline]
  pub fn new(error: impl Into<BoxError>) -> Self { Self::Other(error.into()) }

  #[inline]
  pub fn is_not_ok(&self) -> bool { matches!(self, Self::NotOk) }

  /// Returns the wrapped error if it is of type `E`.
  pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
    match self {
      Self::NotOk => None,
      Self::Other(error) => error.downcast_ref(),
    }
  }
}
