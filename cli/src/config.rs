use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use optio_core::OptionExt;

pub const URL_VAR: &str = "OPTIO_FETCH_URL";
pub const LOG_FILE_VAR: &str = "OPTIO_LOG_FILE";
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

#[derive(Clone, Debug)]
pub struct Config {
  /// URLs to fetch, in order. Not yet parsed: an invalid URL only fails its own fetch.
  pub urls: Vec<String>,
  pub log_file: Option<PathBuf>,
}

impl Config {
  /// Takes URLs from `args`, falling back to the `OPTIO_FETCH_URL` environment variable and then to [`DEFAULT_URL`].
  pub fn from_args_and_env(args: impl IntoIterator<Item=String>) -> Self {
    Self::from_args_and_vars(args, |key| env::var_os(key))
  }

  fn from_args_and_vars(args: impl IntoIterator<Item=String>, var: impl Fn(&str) -> Option<OsString>) -> Self {
    let mut urls: Vec<String> = args.into_iter().collect();
    if urls.is_empty() {
      let url = var(URL_VAR).and_then(|url| url.into_string().ok()).filter(|url| !url.is_empty());
      urls.push(url.value_or(DEFAULT_URL.to_string()));
    }
    let log_file = var(LOG_FILE_VAR).filter(|path| !path.is_empty()).map(PathBuf::from);
    Self { urls, log_file }
  }
}
