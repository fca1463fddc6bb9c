// services/users_service/src/models/user.rs

use chrono::NaiveDate;
use ledgerlink_core::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id: u64,
  pub name: String,
  pub email: String,
  /// Calendar day of creation, serialized as `YYYY-MM-DD`.
  pub created_at: NaiveDate,
  #[serde(default = "default_active")]
  pub active: bool,
}

fn default_active() -> bool {
  true
}

impl Record for User {
  fn id(&self) -> u64 {
    self.id
  }
}
