// services/orders_service/src/lib.rs

//! The order ledger: owns order records and accepts a new order only after the users
//! service confirms that the user exists and is active.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod remote;
pub mod seed;
pub mod state;
pub mod web;

pub const SERVICE_NAME: &str = "orders-service";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Key under which the users service appears in `/health` dependencies.
pub const USERS_DEPENDENCY: &str = "users-service";
