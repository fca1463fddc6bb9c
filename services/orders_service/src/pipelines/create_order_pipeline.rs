// services/orders_service/src/pipelines/create_order_pipeline.rs

use chrono::Local;
use ledgerlink_core::{ContextData, FlowResult, Pipeline, PipelineControl, Registry};
use tracing::{event, info, warn, Level};

use crate::errors::AppError;
use crate::models::{NewOrder, Order, OrderStatus};
use crate::pipelines::contexts::CreateOrderCtxData;
use crate::remote::Verification;

pub fn register_create_order_pipeline(registry: &Registry<AppError>) -> FlowResult<()> {
  let mut p = Pipeline::<CreateOrderCtxData, AppError>::new(&[
    ("validate_order_input", false, None),
    ("verify_user", false, None),
    ("check_user_active", false, None),
    ("persist_order", false, None),
  ]);

  // Step 1: local checks. Nothing leaves the process until these pass.
  p.on("validate_order_input", |ctx_data: ContextData<CreateOrderCtxData>| {
    Box::pin(async move {
      let parsed = NewOrder::from_payload(&ctx_data.read().payload);
      match parsed {
        Ok(new_order) => {
          event!(Level::DEBUG, user_id = new_order.user_id, product = %new_order.product, "Order input valid.");
          ctx_data.write().new_order = Some(new_order);
          Ok(PipelineControl::Continue)
        }
        Err(err) => {
          warn!(error = %err, "Order rejected by local validation.");
          Err(err)
        }
      }
    })
  })?;

  // Step 2: ask the users service. The context lock is released before awaiting.
  p.on("verify_user", |ctx_data: ContextData<CreateOrderCtxData>| {
    Box::pin(async move {
      let (directory, user_id) = {
        let guard = ctx_data.read();
        let user_id = guard
          .new_order
          .as_ref()
          .map(|o| o.user_id)
          .ok_or_else(|| AppError::Internal("verify_user ran before validation".to_string()))?;
        (guard.app_state.user_directory.clone(), user_id)
      };

      match directory.verify_user(user_id).await {
        Verification::Confirmed(user) => {
          ctx_data.write().remote_user = Some(user);
          Ok(PipelineControl::Continue)
        }
        Verification::NotFound => {
          warn!(user_id, "Order rejected: user does not exist.");
          Err(AppError::UserNotFound { user_id })
        }
        Verification::Failed(failure) => {
          warn!(user_id, %failure, "Order rejected: user could not be verified.");
          Err(AppError::UserServiceUnavailable { user_id, failure })
        }
      }
    })
  })?;

  // Step 3
  p.on("check_user_active", |ctx_data: ContextData<CreateOrderCtxData>| {
    Box::pin(async move {
      let guard = ctx_data.read();
      let user_id = guard.new_order.as_ref().map(|o| o.user_id).unwrap_or_default();
      match guard.remote_user.as_ref() {
        Some(user) if user.active => Ok(PipelineControl::Continue),
        Some(_) => {
          warn!(user_id, "Order rejected: user is inactive.");
          Err(AppError::UserInactive { user_id })
        }
        None => Err(AppError::Internal("check_user_active ran without a verified user".to_string())),
      }
    })
  })?;

  // Step 4: id assignment and insert under one store lock.
  p.on("persist_order", |ctx_data: ContextData<CreateOrderCtxData>| {
    Box::pin(async move {
      let (orders, new_order) = {
        let guard = ctx_data.read();
        let new_order = guard
          .new_order
          .clone()
          .ok_or_else(|| AppError::Internal("persist_order ran before validation".to_string()))?;
        (guard.app_state.orders.clone(), new_order)
      };

      let created = orders.insert_with(|_, id| {
        Ok::<_, AppError>(Order {
          id,
          user_id: new_order.user_id,
          product: new_order.product,
          quantity: new_order.quantity,
          price: new_order.price,
          status: OrderStatus::Pending,
          created_at: Local::now().naive_local(),
        })
      })?;

      info!(order_id = created.id, user_id = created.user_id, "Order created.");
      ctx_data.write().created_order = Some(created);
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  })?;

  registry.register_pipeline(p);
  Ok(())
}
