// services/users_service/src/lib.rs

//! The user directory: owns user records and answers existence and liveness queries.
//! It makes no outbound calls.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod seed;
pub mod state;
pub mod web;

pub const SERVICE_NAME: &str = "users-service";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
