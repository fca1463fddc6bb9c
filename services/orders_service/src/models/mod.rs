// services/orders_service/src/models/mod.rs

pub mod new_order;
pub mod order;
pub mod stats;

pub use new_order::NewOrder;
pub use order::{Order, OrderStatus};
pub use stats::OrderStats;
