// src/telemetry.rs

//! Tracing subscriber setup shared by the service binaries.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Output format of the log stream, chosen with `LOG_FORMAT` (`json` or anything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl LogFormat {
  pub fn from_env() -> Self {
    match std::env::var("LOG_FORMAT") {
      Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
      _ => LogFormat::Pretty,
    }
  }
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_directive` (e.g. `"info"`).
///
/// Span close events are logged so each pipeline run and request shows its duration.
pub fn init(default_directive: &str, format: LogFormat) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE);

  match format {
    LogFormat::Json => builder.json().try_init(),
    LogFormat::Pretty => builder.try_init(),
  }
}
