// services/orders_service/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use ledgerlink_core::{ContextData, PipelineResult};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::OrderStats;
use crate::pipelines::contexts::{CreateOrderCtxData, OrderDetailsCtxData};
use crate::remote::{CommunicationStatus, UserInfo};
use crate::state::AppState;
use crate::SERVICE_NAME;

#[derive(Deserialize, Debug, Default)]
pub struct ListOrdersQuery {
  pub user_id: Option<u64>,
  pub status: Option<String>,
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListOrdersQuery>,
) -> Result<HttpResponse, AppError> {
  let ListOrdersQuery { user_id, status } = query.into_inner();
  let status = status.filter(|s| !s.is_empty());

  let orders = app_state.orders.filter(|order| {
    user_id.map_or(true, |id| order.user_id == id)
      && status.as_deref().map_or(true, |s| order.status.as_str() == s)
  });
  info!(count = orders.len(), "Listing orders.");

  Ok(HttpResponse::Ok().json(json!({
      "orders": orders,
      "count": orders.len(),
      "service": SERVICE_NAME,
      "filters_applied": {
          "user_id": user_id,
          "status": status,
      },
  })))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(app_state: web::Data<AppState>, path: web::Path<u64>) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  match app_state.orders.get(order_id) {
    Some(order) => Ok(HttpResponse::Ok().json(order)),
    None => {
      warn!("Order not found.");
      Err(AppError::OrderNotFound { order_id })
    }
  }
}

#[instrument(name = "handler::get_order_details", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_details_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
  let ctx_data = ContextData::new(OrderDetailsCtxData::new(app_state.get_ref().clone(), path.into_inner()));

  match app_state.registry.run(ctx_data.clone()).await? {
    PipelineResult::Completed => {
      let guard = ctx_data.read();
      let order = guard
        .order
        .as_ref()
        .ok_or_else(|| AppError::Internal("Details pipeline completed without an order".to_string()))?;

      Ok(HttpResponse::Ok().json(json!({
          "order": order,
          "user_details": guard.user_details,
          "service": SERVICE_NAME,
          "communication_status": guard.communication_status,
      })))
    }
    PipelineResult::Stopped => Err(AppError::Internal("Order details lookup was halted by a step".to_string())),
  }
}

#[instrument(name = "handler::order_stats", skip(app_state))]
pub async fn order_stats_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let stats = OrderStats::from_orders(&app_state.orders.list())?;

  Ok(HttpResponse::Ok().json(json!({
      "total_orders": stats.total_orders,
      "total_revenue": stats.total_revenue,
      "orders_by_status": stats.orders_by_status,
      "average_order_value": stats.average_order_value,
      "service": SERVICE_NAME,
  })))
}

#[instrument(name = "handler::create_order", skip(app_state, req_payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let ctx_data = ContextData::new(CreateOrderCtxData::new(
    app_state.get_ref().clone(),
    req_payload.into_inner(),
  ));

  match app_state.registry.run(ctx_data.clone()).await? {
    PipelineResult::Completed => {
      let guard = ctx_data.read();
      let (order, user) = guard
        .created_order
        .as_ref()
        .zip(guard.remote_user.as_ref())
        .ok_or_else(|| AppError::Internal("Order pipeline completed without an order".to_string()))?;

      Ok(HttpResponse::Created().json(json!({
          "order": order,
          "user_info": UserInfo::from(user),
          "service_communication": CommunicationStatus::Success,
      })))
    }
    PipelineResult::Stopped => Err(AppError::Internal("Order creation was halted by a step".to_string())),
  }
}
