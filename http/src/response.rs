use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use optio_core::Result;

use crate::decode::{parse_json, read_body, received};
use crate::DecodeError;

/// A fully read response: its status code, a copy of its headers, and its decoded body.
#[derive(Clone, Debug)]
pub struct DecodedResponse<B> {
  pub status_code: StatusCode,
  pub headers: HeaderMap,
  pub body: B,
}

/// Response with the raw body.
pub type SimpleResponse = DecodedResponse<Vec<u8>>;
/// Response with the body parsed as JSON.
pub type JsonResponse<T> = DecodedResponse<T>;

/// Reads the full response, keeping the body as raw bytes.
pub async fn response(outcome: reqwest::Result<Response>) -> Result<SimpleResponse> {
  Ok(decode(outcome, Ok).await?)
}

/// Reads the full response, parsing the body as JSON into `T`.
pub async fn response_json<T: DeserializeOwned>(outcome: reqwest::Result<Response>) -> Result<JsonResponse<T>> {
  Ok(decode(outcome, |raw| parse_json(&raw)).await?)
}

async fn decode<B>(
  outcome: reqwest::Result<Response>,
  parse: impl FnOnce(Vec<u8>) -> std::result::Result<B, DecodeError>,
) -> std::result::Result<DecodedResponse<B>, DecodeError> {
  let response = received(outcome)?;
  let status_code = response.status();
  let headers = response.headers().clone();
  let raw = read_body(response).await?;
  let body = parse(raw)?;
  Ok(DecodedResponse { status_code, headers, body })
}
