// services/orders_service/src/remote/http.rs

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::remote::{CommunicationFailure, DependencyStatus, RemoteUser, UserDirectory, Verification};
use crate::SERVICE_NAME;

/// `UserDirectory` over HTTP. One attempt per call; each request carries its own deadline,
/// which also covers reading the body.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
  http_client: reqwest::Client,
  base_url: String,
  verify_timeout: Duration,
  health_timeout: Duration,
}

impl HttpUserDirectory {
  pub fn new(base_url: impl Into<String>, verify_timeout: Duration, health_timeout: Duration) -> Result<Self> {
    let http_client = reqwest::Client::builder()
      .user_agent(concat!("orders-service/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| AppError::Config(format!("Failed to build users service client: {}", e)))?;

    Ok(Self {
      http_client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
      verify_timeout,
      health_timeout,
    })
  }

  pub fn from_config(config: &AppConfig) -> Result<Self> {
    Self::new(
      config.user_service_url.clone(),
      config.user_verify_timeout,
      config.user_health_timeout,
    )
  }

  fn classify(&self, err: reqwest::Error, timeout: Duration) -> CommunicationFailure {
    if err.is_timeout() {
      CommunicationFailure::Timeout {
        timeout_ms: timeout.as_millis() as u64,
      }
    } else if err.is_decode() {
      CommunicationFailure::MalformedPayload(err.to_string())
    } else {
      CommunicationFailure::Transport(err.to_string())
    }
  }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
  #[instrument(name = "remote::verify_user", skip(self), fields(base_url = %self.base_url))]
  async fn verify_user(&self, user_id: u64) -> Verification {
    let url = format!("{}/users/{}", self.base_url, user_id);

    let response = match self
      .http_client
      .get(&url)
      .header("Accept", "application/json")
      .header("X-Calling-Service", SERVICE_NAME)
      .timeout(self.verify_timeout)
      .send()
      .await
    {
      Ok(response) => response,
      Err(e) => {
        let failure = self.classify(e, self.verify_timeout);
        warn!(%failure, "User verification call failed.");
        return Verification::Failed(failure);
      }
    };

    match response.status() {
      StatusCode::OK => {}
      StatusCode::NOT_FOUND => {
        debug!("Users service reports no such user.");
        return Verification::NotFound;
      }
      status => {
        warn!(status = status.as_u16(), "Unexpected status from users service.");
        return Verification::Failed(CommunicationFailure::UnexpectedStatus(status.as_u16()));
      }
    }

    let body = match response.json::<Value>().await {
      Ok(body) => body,
      Err(e) => {
        let failure = self.classify(e, self.verify_timeout);
        warn!(%failure, "Could not read users service response.");
        return Verification::Failed(failure);
      }
    };

    match RemoteUser::from_payload(body) {
      Ok(user) => {
        debug!(active = user.active, "User verified.");
        Verification::Confirmed(user)
      }
      Err(reason) => {
        warn!(%reason, "Users service payload rejected.");
        Verification::Failed(CommunicationFailure::MalformedPayload(reason))
      }
    }
  }

  #[instrument(name = "remote::probe_health", skip(self), fields(base_url = %self.base_url))]
  async fn probe_health(&self) -> DependencyStatus {
    let url = format!("{}/health", self.base_url);

    match self.http_client.get(&url).timeout(self.health_timeout).send().await {
      Ok(response) if response.status() == StatusCode::OK => DependencyStatus::Healthy,
      Ok(response) => {
        warn!(status = response.status().as_u16(), "Users service reports unhealthy.");
        DependencyStatus::Unhealthy
      }
      Err(e) => {
        warn!(error = %e, "Users service health probe failed.");
        DependencyStatus::Unreachable
      }
    }
  }
}
