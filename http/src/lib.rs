//! Turns the outcome of a `reqwest` call into an [`optio_core::Result`], optionally parsing the body as JSON.
//!
//! Every helper takes what [`reqwest::RequestBuilder::send`] resolves to, so a call reads as
//! `optio_http::json::<Todo>(client.get(url).send().await).await`. Failures are [`optio_core::Error`]s wrapping a
//! [`DecodeError`].

pub mod error;
mod decode;
pub mod response;

pub use decode::{body, body_code, json, json_code};
pub use error::DecodeError;
pub use response::{DecodedResponse, JsonResponse, response, response_json, SimpleResponse};
