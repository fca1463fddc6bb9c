// services/users_service/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use ledgerlink_core::{ContextData, PipelineResult};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::pipelines::contexts::CreateUserCtxData;
use crate::state::AppState;
use crate::SERVICE_NAME;

#[derive(Deserialize, Debug)]
pub struct CreateUserPayload {
  pub name: Option<String>,
  pub email: Option<String>,
}

#[instrument(name = "handler::list_users", skip(app_state))]
pub async fn list_users_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let users = app_state.users.filter(|u| u.active);
  info!(count = users.len(), "Listing active users.");

  Ok(HttpResponse::Ok().json(json!({
      "users": users,
      "count": users.len(),
      "service": SERVICE_NAME,
  })))
}

#[instrument(name = "handler::get_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn get_user_handler(app_state: web::Data<AppState>, path: web::Path<u64>) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  match app_state.users.get(user_id) {
    Some(user) => Ok(HttpResponse::Ok().json(user)),
    None => {
      warn!("User not found.");
      Err(AppError::UserNotFound { user_id })
    }
  }
}

#[instrument(
    name = "handler::create_user",
    skip(app_state, req_payload),
    fields(req_email = ?req_payload.email)
)]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateUserPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  let ctx_data = ContextData::new(CreateUserCtxData::new(
    app_state.get_ref().clone(),
    payload.name,
    payload.email,
  ));

  match app_state.registry.run(ctx_data.clone()).await? {
    PipelineResult::Completed => {
      let user = ctx_data
        .snapshot()
        .created_user
        .ok_or_else(|| AppError::Internal("User pipeline completed without a user".to_string()))?;
      Ok(HttpResponse::Created().json(user))
    }
    PipelineResult::Stopped => Err(AppError::Internal("User creation was halted by a step".to_string())),
  }
}
