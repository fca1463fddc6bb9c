// services/users_service/src/pipelines/create_user_pipeline.rs

use crate::errors::AppError;
use crate::models::User;
use crate::pipelines::contexts::CreateUserCtxData;
use chrono::Local;
use ledgerlink_core::{ContextData, FlowResult, Pipeline, PipelineControl, Registry};
use tracing::{event, info, warn, Level};

pub fn register_create_user_pipeline(registry: &Registry<AppError>) -> FlowResult<()> {
  let mut p = Pipeline::<CreateUserCtxData, AppError>::new(&[
    ("validate_user_input", false, None),
    ("insert_user", false, None),
  ]);

  // Step 1: both fields present and non-blank.
  p.on("validate_user_input", |ctx_data: ContextData<CreateUserCtxData>| {
    Box::pin(async move {
      let guard = ctx_data.read();
      if !is_present(&guard.name) {
        warn!("User creation rejected: name missing.");
        return Err(AppError::MissingField { field: "name" });
      }
      if !is_present(&guard.email) {
        warn!("User creation rejected: email missing.");
        return Err(AppError::MissingField { field: "email" });
      }
      Ok(PipelineControl::Continue)
    })
  })?;

  // Step 2: duplicate check, id assignment and insert under one store lock.
  p.on("insert_user", |ctx_data: ContextData<CreateUserCtxData>| {
    Box::pin(async move {
      let (users, name, email) = {
        let guard = ctx_data.read();
        (
          guard.app_state.users.clone(),
          guard.name.clone().unwrap_or_default(),
          guard.email.clone().unwrap_or_default(),
        )
      };

      event!(Level::DEBUG, %email, "Inserting user.");
      let created = users.insert_with(|existing, id| {
        // Case-sensitive exact match.
        if existing.values().any(|u| u.email == email) {
          return Err(AppError::EmailConflict { email: email.clone() });
        }
        Ok(User {
          id,
          name,
          email: email.clone(),
          created_at: Local::now().date_naive(),
          active: true,
        })
      });

      match created {
        Ok(user) => {
          info!(user_id = user.id, email = %user.email, "User created.");
          ctx_data.write().created_user = Some(user);
          Ok(PipelineControl::Continue)
        }
        Err(err) => {
          warn!(error = %err, "User creation rejected.");
          Err(err)
        }
      }
    })
  })?;

  registry.register_pipeline(p);
  Ok(())
}

fn is_present(field: &Option<String>) -> bool {
  field.as_deref().is_some_and(|v| !v.trim().is_empty())
}
