// services/users_service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use ledgerlink_core::FlowError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Missing required field: {field}")]
  MissingField { field: &'static str },

  #[error("Invalid request body: {0}")]
  InvalidBody(String),

  #[error("User not found")]
  UserNotFound { user_id: u64 },

  #[error("Email is already registered")]
  EmailConflict { email: String },

  #[error("Endpoint not found")]
  EndpointNotFound,

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Pipeline Error: {source}")]
  Flow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(format!("{:#}", err))
  }
}

impl AppError {
  /// Machine-readable reason carried in every failure body.
  pub fn reason(&self) -> &'static str {
    match self {
      AppError::MissingField { .. } | AppError::InvalidBody(_) => "invalid_input",
      AppError::UserNotFound { .. } => "user_not_found",
      AppError::EmailConflict { .. } => "email_conflict",
      AppError::EndpointNotFound => "endpoint_not_found",
      AppError::Config(_) | AppError::Flow { .. } | AppError::Internal(_) => "internal_error",
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::MissingField { .. } | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
      AppError::UserNotFound { .. } | AppError::EndpointNotFound => StatusCode::NOT_FOUND,
      AppError::EmailConflict { .. } => StatusCode::CONFLICT,
      AppError::Config(_) | AppError::Flow { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let reason = self.reason();
    let body = match self {
      AppError::MissingField { field } => json!({"error": self.to_string(), "reason": reason, "field": field}),
      AppError::UserNotFound { user_id } => json!({"error": self.to_string(), "reason": reason, "user_id": user_id}),
      AppError::EmailConflict { email } => json!({"error": self.to_string(), "reason": reason, "email": email}),
      AppError::InvalidBody(_) | AppError::EndpointNotFound => json!({"error": self.to_string(), "reason": reason}),
      AppError::Config(_) | AppError::Flow { .. } | AppError::Internal(_) => {
        // Details stay in the log; the body is generic.
        tracing::error!(application_error = %self, "Responding with internal error");
        json!({"error": "Internal server error", "reason": reason})
      }
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
