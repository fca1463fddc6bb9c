// services/orders_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Load the three demo orders at startup.
  pub seed_data: bool,

  /// Base URL of the users service, without a trailing slash.
  pub user_service_url: String,
  /// Budget for the verification call made while creating an order and while enriching
  /// order details.
  pub user_verify_timeout: Duration,
  /// Budget for the dependency probe made by `/health`. Kept below the verification budget.
  pub user_health_timeout: Duration,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 5002,
      seed_data: true,
      user_service_url: "http://localhost:5001".to_string(),
      user_verify_timeout: Duration::from_secs(5),
      user_health_timeout: Duration::from_secs(3),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let defaults = Self::default();

    let server_host = env::var("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = parse_var("SERVER_PORT", defaults.server_port)?;
    let seed_data = parse_var("SEED_DATA", defaults.seed_data)?;
    let user_service_url = env::var("USER_SERVICE_URL")
      .map(|url| url.trim_end_matches('/').to_string())
      .unwrap_or(defaults.user_service_url);
    let user_verify_timeout = parse_var("USER_VERIFY_TIMEOUT_MS", defaults.user_verify_timeout.as_millis() as u64)
      .map(Duration::from_millis)?;
    let user_health_timeout = parse_var("USER_HEALTH_TIMEOUT_MS", defaults.user_health_timeout.as_millis() as u64)
      .map(Duration::from_millis)?;

    if user_service_url.is_empty() {
      return Err(AppError::Config("USER_SERVICE_URL must not be empty".to_string()));
    }
    if user_verify_timeout.is_zero() || user_health_timeout.is_zero() {
      return Err(AppError::Config("Users service timeouts must be greater than zero".to_string()));
    }

    tracing::info!(
      %server_host,
      server_port,
      seed_data,
      %user_service_url,
      verify_timeout_ms = user_verify_timeout.as_millis() as u64,
      health_timeout_ms = user_health_timeout.as_millis() as u64,
      "Orders service configuration loaded."
    );

    Ok(Self {
      server_host,
      server_port,
      seed_data,
      user_service_url,
      user_verify_timeout,
      user_health_timeout,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match env::var(name) {
    Ok(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", name, raw, e))),
    Err(_) => Ok(default),
  }
}
