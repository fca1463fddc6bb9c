// services/orders_service/src/pipelines/order_details_pipeline.rs

use ledgerlink_core::{ContextData, FlowResult, Pipeline, PipelineControl, Registry};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::pipelines::contexts::OrderDetailsCtxData;
use crate::remote::{CommunicationStatus, Verification};

pub fn register_order_details_pipeline(registry: &Registry<AppError>) -> FlowResult<()> {
  let mut p = Pipeline::<OrderDetailsCtxData, AppError>::new(&[
    ("load_order", false, None),
    ("enrich_user_details", true, None), // Optional
  ]);

  p.on("load_order", |ctx_data: ContextData<OrderDetailsCtxData>| {
    Box::pin(async move {
      let (orders, order_id) = {
        let guard = ctx_data.read();
        (guard.app_state.orders.clone(), guard.order_id)
      };
      match orders.get(order_id) {
        Some(order) => {
          ctx_data.write().order = Some(order);
          Ok(PipelineControl::Continue)
        }
        None => {
          warn!(order_id, "Order not found.");
          Err(AppError::OrderNotFound { order_id })
        }
      }
    })
  })?;

  // Best-effort: any verification outcome other than a confirmed user degrades the
  // response instead of failing it.
  p.on("enrich_user_details", |ctx_data: ContextData<OrderDetailsCtxData>| {
    Box::pin(async move {
      let (directory, user_id) = {
        let guard = ctx_data.read();
        match guard.order.as_ref() {
          Some(order) => (guard.app_state.user_directory.clone(), order.user_id),
          None => {
            warn!("Cannot enrich order details, order not loaded.");
            return Ok(PipelineControl::Continue);
          }
        }
      };

      let verification = directory.verify_user(user_id).await;
      let mut guard = ctx_data.write();
      match verification {
        Verification::Confirmed(user) => {
          debug!(user_id, "Order details enriched.");
          guard.user_details = Some(user.payload);
          guard.communication_status = CommunicationStatus::Success;
        }
        Verification::NotFound => {
          warn!(user_id, "Order references a user the users service does not know.");
          guard.user_details = None;
          guard.communication_status = CommunicationStatus::Failed;
        }
        Verification::Failed(failure) => {
          warn!(user_id, %failure, "Serving order details without user data.");
          guard.user_details = None;
          guard.communication_status = CommunicationStatus::Failed;
        }
      }
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  })?;

  registry.register_pipeline(p);
  Ok(())
}
