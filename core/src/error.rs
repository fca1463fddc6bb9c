// src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Step not found: {step_name}")]
    StepNotFound { step_name: String },

    #[error("Handler missing for non-optional step: {step_name}")]
    HandlerMissing { step_name: String },

    #[error("Type mismatch during context downcast (expected {expected_type}, step: '{step_name}')")]
    TypeMismatch {
        step_name: String,
        expected_type: String,
    },

    #[error("No pipeline registered for context type {context_type}")]
    PipelineNotRegistered { context_type: String },

    #[error("Error in step handler or external operation. Source: {source}")]
    HandlerError {
        #[source]
        source: AnyhowError,
    },
}

impl From<AnyhowError> for FlowError {
    fn from(err: AnyhowError) -> Self {
        FlowError::HandlerError { source: err }
    }
}

pub type FlowResult<T, E = FlowError> = std::result::Result<T, E>;
