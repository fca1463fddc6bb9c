// services/orders_service/src/models/order.rs

use chrono::NaiveDateTime;
use ledgerlink_core::Record;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Completed,
  Shipped,
}

impl OrderStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Completed => "completed",
      OrderStatus::Shipped => "shipped",
    }
  }
}

impl std::fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: u64,
  pub user_id: u64,
  pub product: String,
  pub quantity: u32,
  pub price: Decimal,
  pub status: OrderStatus,
  pub created_at: NaiveDateTime,
}

impl Order {
  /// `price * quantity`, unrounded. `None` if it does not fit in a `Decimal`.
  pub fn line_total(&self) -> Option<Decimal> {
    self.price.checked_mul(Decimal::from(self.quantity))
  }
}

impl Record for Order {
  fn id(&self) -> u64 {
    self.id
  }
}
