use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use optio_core::Result;

use crate::DecodeError;

/// Reads the full body of the response.
///
/// A transport error, or an error while reading the body, fails the result.
pub async fn body(outcome: reqwest::Result<Response>) -> Result<Vec<u8>> {
  let response = received(outcome)?;
  Ok(read_body(response).await?)
}

/// Like [`body`], paired with the status code of the response, or 0 if there was no response.
pub async fn body_code(outcome: reqwest::Result<Response>) -> (Result<Vec<u8>>, u16) {
  let status_code = status_code(&outcome);
  (body(outcome).await, status_code)
}

/// Reads the full body of the response and parses it as JSON into `T`.
pub async fn json<T: DeserializeOwned>(outcome: reqwest::Result<Response>) -> Result<T> {
  let raw = body(outcome).await?;
  Ok(parse_json(&raw)?)
}

/// Like [`json`], paired with the status code of the response, or 0 if there was no response.
pub async fn json_code<T: DeserializeOwned>(outcome: reqwest::Result<Response>) -> (Result<T>, u16) {
  let status_code = status_code(&outcome);
  (json(outcome).await, status_code)
}


pub(crate) fn received(outcome: reqwest::Result<Response>) -> std::result::Result<Response, DecodeError> {
  outcome.map_err(|cause| {
    debug!(%cause, "request failed before a response was received");
    DecodeError::from(cause)
  })
}

pub(crate) async fn read_body(response: Response) -> std::result::Result<Vec<u8>, DecodeError> {
  debug!(status = %response.status(), url = %response.url(), "reading response body");
  let bytes = response.bytes().await?;
  Ok(bytes.to_vec())
}

pub(crate) fn parse_json<T: DeserializeOwned>(raw: &[u8]) -> std::result::Result<T, DecodeError> {
  serde_json::from_slice(raw).map_err(|cause| {
    debug!(%cause, len = raw.len(), "failed to parse response body as JSON");
    DecodeError::from(cause)
  })
}

fn status_code(outcome: &reqwest::Result<Response>) -> u16 {
  outcome.as_ref().map_or(0, |response| response.status().as_u16())
}
