// services/orders_service/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use ledgerlink_core::telemetry::{self, LogFormat};
use orders_service::config::AppConfig;
use orders_service::state::AppState;
use orders_service::web;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  if let Err(e) = telemetry::init("info", LogFormat::from_env()) {
    eprintln!("Failed to install tracing subscriber: {}", e);
  }

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  let server_address = app_config.bind_address();

  let app_state = AppState::new(app_config).map_err(|e| {
    tracing::error!(error = %e, "Failed to build application state.");
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
  })?;
  tracing::info!(
    orders = app_state.orders.len(),
    users_service = %app_state.config.user_service_url,
    "Order ledger ready."
  );

  tracing::info!("Binding orders service to {}...", server_address);
  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
