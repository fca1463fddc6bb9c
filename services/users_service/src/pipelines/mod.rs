// services/users_service/src/pipelines/mod.rs

//! Pipelines run by the users service.

use crate::errors::AppError;
use ledgerlink_core::{FlowResult, Registry};

pub mod contexts;
pub mod create_user_pipeline;

/// Registers every pipeline with `registry`. Called once while building `AppState`.
pub fn register_all_pipelines(registry: &Registry<AppError>) -> FlowResult<()> {
  create_user_pipeline::register_create_user_pipeline(registry)?;
  tracing::debug!("Users service pipelines registered.");
  Ok(())
}
