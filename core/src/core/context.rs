// src/core/context.rs

//! Defines the `Handler<TData, Err>` type for pipeline step handlers.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// Boxed async step handler.
///
/// A handler receives a clone of the pipeline's `ContextData<TData>` and resolves to
/// `Result<PipelineControl, Err>`. Handlers must:
/// 1. Take `.read()` / `.write()` guards only inside a block that ends before any `.await`.
/// 2. Copy out whatever they need (ids, client handles, store handles) before suspending.
/// 3. Return `PipelineControl::Stop` to end the run early without an error.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;
