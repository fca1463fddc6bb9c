// services/users_service/src/web/handlers/health_handlers.rs

use actix_web::HttpResponse;
use chrono::Local;
use serde_json::json;

use crate::{SERVICE_NAME, SERVICE_VERSION};

/// Liveness only; this service has no outbound dependencies to check.
pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({
      "status": "healthy",
      "service": SERVICE_NAME,
      "timestamp": Local::now().naive_local(),
      "version": SERVICE_VERSION,
  }))
}
