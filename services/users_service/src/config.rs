// services/users_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Load the three demo users at startup.
  pub seed_data: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 5001,
      seed_data: true,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let defaults = Self::default();
    let server_host = env::var("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match env::var("SERVER_PORT") {
      Ok(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT '{}': {}", raw, e)))?,
      Err(_) => defaults.server_port,
    };
    let seed_data = match env::var("SEED_DATA") {
      Ok(raw) => raw
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid SEED_DATA '{}': {}", raw, e)))?,
      Err(_) => defaults.seed_data,
    };

    tracing::info!(%server_host, server_port, seed_data, "Users service configuration loaded.");

    Ok(Self {
      server_host,
      server_port,
      seed_data,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
