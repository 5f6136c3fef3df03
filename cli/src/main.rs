use std::env;
use std::error::Error;
use std::process::ExitCode;

use serde_json::Value;
use tracing::{error, info, instrument};
use url::Url;

use optio_core::{Options, ResultExt};

use crate::config::Config;
use crate::logging::AppTracingBuilder;

mod config;
mod logging;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
  let config = Config::from_args_and_env(env::args().skip(1));
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(config.log_file.clone())
    .build();

  let client = reqwest::Client::builder().build()?;
  let mut fetched = Options::with_capacity(config.urls.len());
  for url in &config.urls {
    fetched.push_option(fetch(&client, url).await);
  }

  fetched.each_indexed(|index, value| {
    println!("{}", config.urls[index]);
    println!("{value:#}");
  });

  let failed = fetched.len() - fetched.somes().count();
  if failed > 0 {
    error!(failed, total = fetched.len(), "not every URL could be fetched");
    return Ok(ExitCode::FAILURE);
  }
  Ok(ExitCode::SUCCESS)
}

/// Fetches `url` and parses its body as JSON, logging and returning `None` on failure.
#[instrument(skip(client))]
async fn fetch(client: &reqwest::Client, url: &str) -> Option<Value> {
  let url = Url::parse(url).map_err(|cause| error!(%cause, "invalid URL")).ok()?;
  let (result, status_code) = optio_http::json_code::<Value>(client.get(url).send().await).await;
  result.switch_transform(
    |value| {
      info!(status_code, "fetched");
      value
    },
    |cause| error!(status_code, %cause, source = ?cause.source(), "fetch failed"),
  ).ok()
}
