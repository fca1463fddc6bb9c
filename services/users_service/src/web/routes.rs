// services/users_service/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{health_handlers, not_found_handler, user_handlers};

/// Routes plus extractor error handling, applied with `App::configure`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
      AppError::InvalidBody(format!("No valid JSON object provided: {}", err)).into()
    }))
    // Non-numeric ids do not match any route.
    .app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::EndpointNotFound.into()))
    .route("/health", web::get().to(health_handlers::health_check_handler))
    .service(
      web::resource("/users")
        .route(web::get().to(user_handlers::list_users_handler))
        .route(web::post().to(user_handlers::create_user_handler)),
    )
    .route("/users/{user_id}", web::get().to(user_handlers::get_user_handler))
    .default_service(web::to(not_found_handler));
}
