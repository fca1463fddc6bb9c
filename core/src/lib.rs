// src/lib.rs

//! Shared runtime for the ledgerlink services.
//!
//! Both the user directory and the order ledger are small actix-web services that run
//! their write paths as step pipelines and keep their records in process memory. This
//! crate holds the pieces they have in common:
//!  - An async step pipeline (`Pipeline`) with before/on/after hooks, optional steps,
//!    skip conditions and early stopping, plus a type-keyed `Registry` to run them.
//!  - `RecordStore<T>`, a keyed in-memory store whose id assignment and insert happen
//!    inside a single lock section.
//!  - `telemetry::init`, the tracing subscriber setup used by every binary.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod store;
pub mod telemetry;

pub use crate::core::context::Handler;
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;
pub use crate::registry::Registry;

pub use crate::error::{FlowError, FlowResult};
pub use crate::store::{IdSequence, Record, RecordStore};

/*
    Typical request flow inside a service:
    1. A handler builds the pipeline's context struct (request input + shared state handles).
    2. It wraps the struct in `ContextData` and calls `registry.run(ctx.clone())`.
    3. Steps read and write the context, dropping lock guards before every `.await`.
    4. A step returns `Err(AppError)` to reject the request, or `Stop` to end early.
    5. The handler reads the outcome back out of the context and renders the response.
*/
