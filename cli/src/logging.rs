use std::fs::{create_dir_all, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const CONSOLE_LOG_VAR: &str = "OPTIO_LOG";
pub const FILE_LOG_VAR: &str = "OPTIO_FILE_LOG";

/// Sets up logging to stderr, filtered by `OPTIO_LOG`, and optionally to a file, filtered by `OPTIO_FILE_LOG`.
#[derive(Default)]
pub struct AppTracingBuilder {
  log_file_path: Option<PathBuf>,
}
impl AppTracingBuilder {
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<PathBuf>) -> Self {
    self.log_file_path = log_file_path;
    self
  }

  pub fn build(self) -> AppTracing {
    let console_filter = filter_from_env(CONSOLE_LOG_VAR, "warn");
    let file = self.log_file_path.as_deref().map(|p| (p, filter_from_env(FILE_LOG_VAR, "debug")));
    AppTracing::new(console_filter, file)
  }
}

fn filter_from_env(var: &str, default_directive: &str) -> EnvFilter {
  EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installed tracing subscriber. Keep it alive for the duration of the program so that the log file is flushed.
pub struct AppTracing {
  _file_guard: Option<WorkerGuard>,
}
impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(&Path, EnvFilter)>) -> Self {
    let console = tracing_subscriber::fmt::layer()
      .with_writer(io::stderr)
      .with_filter(console_filter);

    let (opened, open_error) = match file.map(|(path, filter)| (open_log_file(path), path, filter)) {
      Some((Ok(log_file), _, filter)) => (Some((log_file, filter)), None),
      Some((Err(e), path, _)) => (None, Some((path.to_path_buf(), e))),
      None => (None, None),
    };
    let (file_layer, _file_guard) = match opened {
      Some((log_file, filter)) => {
        let (writer, guard) = tracing_appender::non_blocking(log_file);
        let layer = tracing_subscriber::fmt::layer()
          .with_writer(writer)
          .with_ansi(false)
          .with_filter(filter);
        (Some(layer), Some(guard))
      }
      None => (None, None),
    };

    tracing_subscriber::registry()
      .with(console)
      .with(file_layer)
      .init();
    if let Some((path, e)) = open_error {
      tracing::warn!(path = %path.display(), error = %e, "logging to stderr only; log file is unavailable");
    }

    Self { _file_guard }
  }
}

fn open_log_file(path: &Path) -> io::Result<File> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    create_dir_all(parent)?;
  }
  File::create(path)
}
