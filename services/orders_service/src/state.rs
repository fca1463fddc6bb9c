// services/orders_service/src/state.rs
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::Order;
use crate::remote::{HttpUserDirectory, UserDirectory};
use crate::{pipelines, seed};
use ledgerlink_core::{RecordStore, Registry};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub orders: Arc<RecordStore<Order>>,
  pub user_directory: Arc<dyn UserDirectory>,
  pub registry: Arc<Registry<AppError>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// Wires the HTTP users service client from `config`.
  pub fn new(config: AppConfig) -> Result<Self> {
    let directory = HttpUserDirectory::from_config(&config)?;
    Self::with_directory(config, Arc::new(directory))
  }

  /// Builds the store (seeded if configured) and registers every pipeline.
  pub fn with_directory(config: AppConfig, user_directory: Arc<dyn UserDirectory>) -> Result<Self> {
    let orders = if config.seed_data {
      RecordStore::seeded("orders", seed::seed_orders()?)
    } else {
      RecordStore::new("orders")
    };

    let registry = Arc::new(Registry::new());
    pipelines::register_all_pipelines(&registry)?;

    Ok(Self {
      orders: Arc::new(orders),
      user_directory,
      registry,
      config: Arc::new(config),
    })
  }
}
