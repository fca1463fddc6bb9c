// services/users_service/src/web/handlers/mod.rs

use crate::errors::AppError;

pub mod health_handlers;
pub mod user_handlers;

/// Fallback for unmatched routes.
pub async fn not_found_handler() -> Result<actix_web::HttpResponse, AppError> {
  Err(AppError::EndpointNotFound)
}
