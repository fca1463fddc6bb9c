// services/orders_service/src/models/stats.rs

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::{AppError, Result};
use crate::models::Order;

/// Aggregates over the whole ledger. Money values are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStats {
  pub total_orders: usize,
  pub total_revenue: Decimal,
  pub orders_by_status: BTreeMap<&'static str, usize>,
  pub average_order_value: Decimal,
}

impl OrderStats {
  /// Fails with `AppError::Internal` if the revenue does not fit in a `Decimal`.
  pub fn from_orders(orders: &[Order]) -> Result<Self> {
    let total_orders = orders.len();
    let revenue = orders
      .iter()
      .try_fold(Decimal::ZERO, |sum, order| {
        order.line_total().and_then(|total| sum.checked_add(total))
      })
      .ok_or_else(|| AppError::Internal(format!("Revenue over {} orders overflowed", total_orders)))?;

    let mut orders_by_status = BTreeMap::new();
    for order in orders {
      *orders_by_status.entry(order.status.as_str()).or_insert(0) += 1;
    }

    // Averaged from the unrounded revenue.
    let average = if total_orders == 0 {
      Decimal::ZERO
    } else {
      revenue / Decimal::from(total_orders)
    };

    Ok(Self {
      total_orders,
      total_revenue: to_cents(revenue),
      orders_by_status,
      average_order_value: to_cents(average),
    })
  }
}

fn to_cents(value: Decimal) -> Decimal {
  value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::OrderStatus;
  use chrono::NaiveDate;

  fn order(id: u64, price: Decimal, quantity: u32, status: OrderStatus) -> Order {
    Order {
      id,
      user_id: 1,
      product: format!("item-{id}"),
      quantity,
      price,
      status,
      created_at: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap(),
    }
  }

  #[test]
  fn empty_ledger_has_zero_average() {
    let stats = OrderStats::from_orders(&[]).unwrap();
    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.total_revenue, Decimal::ZERO);
    assert_eq!(stats.average_order_value, Decimal::ZERO);
    assert!(stats.orders_by_status.is_empty());
  }

  #[test]
  fn revenue_and_average_are_rounded_to_cents() {
    let orders = [
      order(1, Decimal::new(120000, 2), 1, OrderStatus::Completed),
      order(2, Decimal::new(2500, 2), 2, OrderStatus::Pending),
      order(3, Decimal::new(15000, 2), 1, OrderStatus::Shipped),
    ];
    let stats = OrderStats::from_orders(&orders).unwrap();

    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.total_revenue, Decimal::new(140000, 2));
    assert_eq!(stats.average_order_value, Decimal::new(46667, 2));
    assert_eq!(stats.orders_by_status.get("pending"), Some(&1));
    assert_eq!(stats.orders_by_status.get("completed"), Some(&1));
    assert_eq!(stats.orders_by_status.get("shipped"), Some(&1));
  }

  #[test]
  fn statuses_are_counted() {
    let orders = [
      order(1, Decimal::ONE, 1, OrderStatus::Pending),
      order(2, Decimal::ONE, 1, OrderStatus::Pending),
    ];
    let stats = OrderStats::from_orders(&orders).unwrap();
    assert_eq!(stats.orders_by_status.len(), 1);
    assert_eq!(stats.orders_by_status["pending"], 2);
  }

  #[test]
  fn overflowing_revenue_is_an_error() {
    let orders = [
      order(1, Decimal::MAX, 1, OrderStatus::Pending),
      order(2, Decimal::MAX, 1, OrderStatus::Pending),
    ];
    assert!(matches!(OrderStats::from_orders(&orders), Err(AppError::Internal(_))));

    let single = [order(1, Decimal::MAX, 2, OrderStatus::Pending)];
    assert!(matches!(OrderStats::from_orders(&single), Err(AppError::Internal(_))));
  }
}
