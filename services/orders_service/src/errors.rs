// services/orders_service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use ledgerlink_core::FlowError;
use serde_json::json;
use thiserror::Error;

use crate::remote::CommunicationFailure;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("No data provided")]
  MissingData,

  #[error("Missing required field: {field}")]
  MissingField { field: &'static str },

  #[error("Invalid value for {field}: {message}")]
  InvalidField { field: &'static str, message: String },

  #[error("Invalid request body: {0}")]
  InvalidBody(String),

  #[error("Invalid query parameters: {0}")]
  InvalidQuery(String),

  // The users service answered: there is no such user.
  #[error("User not found in users service")]
  UserNotFound { user_id: u64 },

  #[error("Could not verify user with users service")]
  UserServiceUnavailable {
    user_id: u64,
    failure: CommunicationFailure,
  },

  #[error("User is inactive")]
  UserInactive { user_id: u64 },

  #[error("Order not found")]
  OrderNotFound { order_id: u64 },

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
      AppError::MissingData
      | AppError::MissingField { .. }
      | AppError::InvalidField { .. }
      | AppError::InvalidBody(_)
      | AppError::InvalidQuery(_) => "invalid_input",
      AppError::UserNotFound { .. } => "user_not_found",
      AppError::UserServiceUnavailable { .. } => "user_service_unavailable",
      AppError::UserInactive { .. } => "user_inactive",
      AppError::OrderNotFound { .. } => "order_not_found",
      AppError::EndpointNotFound => "endpoint_not_found",
      AppError::Config(_) | AppError::Flow { .. } | AppError::Internal(_) => "internal_error",
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::MissingData
      | AppError::MissingField { .. }
      | AppError::InvalidField { .. }
      | AppError::InvalidBody(_)
      | AppError::InvalidQuery(_)
      | AppError::UserNotFound { .. }
      | AppError::UserServiceUnavailable { .. }
      | AppError::UserInactive { .. } => StatusCode::BAD_REQUEST,
      AppError::OrderNotFound { .. } | AppError::EndpointNotFound => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Flow { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let reason = self.reason();
    let body = match self {
      AppError::MissingField { field } => json!({"error": self.to_string(), "reason": reason, "field": field}),
      AppError::InvalidField { field, .. } => json!({"error": self.to_string(), "reason": reason, "field": field}),
      AppError::UserNotFound { user_id } => json!({
          "error": self.to_string(),
          "reason": reason,
          "user_id": user_id,
          "service_communication": "success",
      }),
      AppError::UserServiceUnavailable { user_id, failure } => json!({
          "error": self.to_string(),
          "reason": reason,
          "user_id": user_id,
          "failure": failure.kind(),
          "service_communication": "failed",
      }),
      AppError::UserInactive { user_id } => json!({"error": self.to_string(), "reason": reason, "user_id": user_id}),
      AppError::OrderNotFound { order_id } => json!({"error": self.to_string(), "reason": reason, "order_id": order_id}),
      AppError::MissingData | AppError::InvalidBody(_) | AppError::InvalidQuery(_) | AppError::EndpointNotFound => {
        json!({"error": self.to_string(), "reason": reason})
      }
      AppError::Config(_) | AppError::Flow { .. } | AppError::Internal(_) => {
        tracing::error!(application_error = %self, "Responding with internal error");
        json!({"error": "Internal server error", "reason": reason})
      }
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
