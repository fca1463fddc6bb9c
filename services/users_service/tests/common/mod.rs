// tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use tracing::Level;
use users_service::config::AppConfig;
use users_service::state::AppState;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn seeded_state() -> AppState {
  AppState::new(AppConfig::default()).expect("seeded state")
}

pub fn empty_state() -> AppState {
  AppState::new(AppConfig {
    seed_data: false,
    ..AppConfig::default()
  })
  .expect("empty state")
}

/// Builds an in-process service over `$state` with the production routes.
macro_rules! users_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(users_service::web::configure_app_routes),
    )
    .await
  };
}
