// services/orders_service/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Local;
use serde_json::json;
use tracing::instrument;

use crate::state::AppState;
use crate::{SERVICE_NAME, SERVICE_VERSION, USERS_DEPENDENCY};

/// Always reports this service as healthy; the users service status is informational.
#[instrument(name = "handler::health", skip(app_state))]
pub async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let users_status = app_state.user_directory.probe_health().await;

  HttpResponse::Ok().json(json!({
      "status": "healthy",
      "service": SERVICE_NAME,
      "dependencies": { USERS_DEPENDENCY: users_status },
      "timestamp": Local::now().naive_local(),
      "version": SERVICE_VERSION,
  }))
}
