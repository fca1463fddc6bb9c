// services/orders_service/src/pipelines/contexts.rs

//! Pipeline context structs. Handlers receive these wrapped in `ContextData`.

use serde_json::Value;

use crate::models::{NewOrder, Order};
use crate::remote::{CommunicationStatus, RemoteUser};
use crate::state::AppState;

#[derive(Clone)]
pub struct CreateOrderCtxData {
  pub app_state: AppState,
  /// Raw request body; parsed by `validate_order_input`.
  pub payload: Value,

  pub new_order: Option<NewOrder>,
  /// Set by `verify_user`.
  pub remote_user: Option<RemoteUser>,
  /// Set by `persist_order`.
  pub created_order: Option<Order>,
}

impl CreateOrderCtxData {
  pub fn new(app_state: AppState, payload: Value) -> Self {
    Self {
      app_state,
      payload,
      new_order: None,
      remote_user: None,
      created_order: None,
    }
  }
}

#[derive(Clone)]
pub struct OrderDetailsCtxData {
  pub app_state: AppState,
  pub order_id: u64,

  pub order: Option<Order>,
  pub user_details: Option<Value>,
  pub communication_status: CommunicationStatus,
}

impl OrderDetailsCtxData {
  pub fn new(app_state: AppState, order_id: u64) -> Self {
    Self {
      app_state,
      order_id,
      order: None,
      user_details: None,
      communication_status: CommunicationStatus::Failed,
    }
  }
}
