// services/orders_service/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{health_handlers, not_found_handler, order_handlers};

/// Routes plus extractor error handling, applied with `App::configure`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
      AppError::InvalidBody(format!("No valid JSON object provided: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| AppError::InvalidQuery(err.to_string()).into()))
    // Non-numeric ids do not match any route.
    .app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::EndpointNotFound.into()))
    .route("/health", web::get().to(health_handlers::health_check_handler))
    .service(
      web::resource("/orders")
        .route(web::get().to(order_handlers::list_orders_handler))
        .route(web::post().to(order_handlers::create_order_handler)),
    )
    // Must be registered ahead of `/orders/{order_id}`.
    .route("/orders/stats", web::get().to(order_handlers::order_stats_handler))
    .route("/orders/{order_id}", web::get().to(order_handlers::get_order_handler))
    .route(
      "/orders/{order_id}/details",
      web::get().to(order_handlers::get_order_details_handler),
    )
    .default_service(web::to(not_found_handler));
}
