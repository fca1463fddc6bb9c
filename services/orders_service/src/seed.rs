// services/orders_service/src/seed.rs

//! Demo ledger loaded at startup when `SEED_DATA` is enabled. Prices are given in cents.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::errors::{AppError, Result};
use crate::models::{Order, OrderStatus};

const SEED_ORDERS: [(u64, u64, &str, u32, i64, OrderStatus, &str); 3] = [
  (1, 1, "Laptop HP Pavilion", 1, 120000, OrderStatus::Completed, "2025-01-15T10:30:00"),
  (2, 2, "Mouse Inalambrico", 2, 2500, OrderStatus::Pending, "2025-01-16T14:20:00"),
  (3, 1, "Teclado Mecanico", 1, 15000, OrderStatus::Shipped, "2025-01-17T09:15:00"),
];

pub fn seed_orders() -> Result<Vec<Order>> {
  SEED_ORDERS
    .iter()
    .map(|(id, user_id, product, quantity, cents, status, created_at)| {
      let created_at = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| AppError::Internal(format!("Bad seed timestamp '{}': {}", created_at, e)))?;
      Ok(Order {
        id: *id,
        user_id: *user_id,
        product: (*product).to_string(),
        quantity: *quantity,
        price: Decimal::new(*cents, 2),
        status: *status,
        created_at,
      })
    })
    .collect()
}
