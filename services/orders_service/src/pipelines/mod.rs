// services/orders_service/src/pipelines/mod.rs

//! Pipelines run by the order ledger.

use crate::errors::AppError;
use ledgerlink_core::{FlowResult, Registry};

pub mod contexts;
pub mod create_order_pipeline;
pub mod order_details_pipeline;

/// Registers every pipeline with `registry`. Called once while building `AppState`.
pub fn register_all_pipelines(registry: &Registry<AppError>) -> FlowResult<()> {
  create_order_pipeline::register_create_order_pipeline(registry)?;
  order_details_pipeline::register_order_details_pipeline(registry)?;
  tracing::debug!("Orders service pipelines registered.");
  Ok(())
}
