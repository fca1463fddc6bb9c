// services/users_service/src/pipelines/contexts.rs

//! Pipeline context structs. Handlers receive these wrapped in `ContextData`.

use crate::models::User;
use crate::state::AppState;

#[derive(Clone)]
pub struct CreateUserCtxData {
  pub app_state: AppState,
  pub name: Option<String>,
  pub email: Option<String>,
  /// Set by `insert_user`.
  pub created_user: Option<User>,
}

impl CreateUserCtxData {
  pub fn new(app_state: AppState, name: Option<String>, email: Option<String>) -> Self {
    Self {
      app_state,
      name,
      email,
      created_user: None,
    }
  }
}
