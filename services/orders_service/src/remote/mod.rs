// services/orders_service/src/remote/mod.rs

//! The contract for calls from the order ledger to the users service.
//!
//! Every call is a single attempt bounded by a timeout. A caller gets exactly one of three
//! answers: the user payload, "no such user" (the service answered with 404), or a
//! [`CommunicationFailure`] meaning the question could not be answered. Callers must not
//! collapse the last two.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod http;
pub mod payload;

pub use http::HttpUserDirectory;
pub use payload::{RemoteUser, UserInfo};

/// Result of asking the users service about one user.
#[derive(Debug, Clone)]
pub enum Verification {
  Confirmed(RemoteUser),
  NotFound,
  Failed(CommunicationFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommunicationFailure {
  #[error("users service did not answer within {timeout_ms} ms")]
  Timeout { timeout_ms: u64 },

  #[error("could not reach users service: {0}")]
  Transport(String),

  #[error("users service answered with unexpected status {0}")]
  UnexpectedStatus(u16),

  #[error("users service returned an unusable payload: {0}")]
  MalformedPayload(String),
}

impl CommunicationFailure {
  pub fn kind(&self) -> &'static str {
    match self {
      CommunicationFailure::Timeout { .. } => "timeout",
      CommunicationFailure::Transport(_) => "transport",
      CommunicationFailure::UnexpectedStatus(_) => "unexpected_status",
      CommunicationFailure::MalformedPayload(_) => "malformed_payload",
    }
  }
}

/// Whether a remote call got an answer, as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStatus {
  Success,
  Failed,
}

/// Users service health as seen from the order ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
  Healthy,
  Unhealthy,
  Unreachable,
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
  /// `GET /users/{user_id}`, bounded by the verification timeout.
  async fn verify_user(&self, user_id: u64) -> Verification;

  /// `GET /health`, bounded by the probe timeout.
  async fn probe_health(&self) -> DependencyStatus;
}
