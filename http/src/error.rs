use thiserror::Error;

/// Reason an HTTP call could not be decoded, wrapped by [`optio_core::Error`].
#[derive(Debug, Error)]
pub enum DecodeError {
  #[error("HTTP request failed")]
  Request(#[from] reqwest::Error),
  #[error("Deserializing JSON body failed")]
  Json(#[from] serde_json::Error),
}

impl DecodeError {
  /// Returns the decode error wrapped by `error`, if any.
  #[inline]
  pub fn of(error: &optio_core::Error) -> Option<&Self> { error.downcast_ref() }
}

impl From<DecodeError> for optio_core::Error {
  #[inline]
  fn from(error: DecodeError) -> Self { optio_core::Error::new(error) }
}
