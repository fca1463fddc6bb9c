// services/users_service/src/state.rs
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::User;
use crate::{pipelines, seed};
use ledgerlink_core::{RecordStore, Registry};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub users: Arc<RecordStore<User>>,
  pub registry: Arc<Registry<AppError>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// Builds the store (seeded if configured) and registers every pipeline.
  pub fn new(config: AppConfig) -> Result<Self> {
    let users = if config.seed_data {
      RecordStore::seeded("users", seed::seed_users()?)
    } else {
      RecordStore::new("users")
    };

    let registry = Arc::new(Registry::new());
    pipelines::register_all_pipelines(&registry)?;

    Ok(Self {
      users: Arc::new(users),
      registry,
      config: Arc::new(config),
    })
  }
}
