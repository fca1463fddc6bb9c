// services/users_service/src/seed.rs

//! Demo users loaded at startup when `SEED_DATA` is enabled.

use crate::errors::{AppError, Result};
use crate::models::User;
use chrono::NaiveDate;

const SEED_USERS: [(u64, &str, &str, &str); 3] = [
  (1, "Juan Perez", "juan@email.com", "2025-01-10"),
  (2, "Maria Gonzalez", "maria@email.com", "2025-01-12"),
  (3, "Carlos Lopez", "carlos@email.com", "2025-01-15"),
];

pub fn seed_users() -> Result<Vec<User>> {
  SEED_USERS
    .iter()
    .map(|(id, name, email, created_at)| {
      let created_at = created_at
        .parse::<NaiveDate>()
        .map_err(|e| AppError::Internal(format!("Bad seed date '{}': {}", created_at, e)))?;
      Ok(User {
        id: *id,
        name: (*name).to_string(),
        email: (*email).to_string(),
        created_at,
        active: true,
      })
    })
    .collect()
}
