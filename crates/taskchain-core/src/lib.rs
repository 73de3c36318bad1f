//! taskchain-core
//!
//! A sequential pipeline runner: named tasks run one after another, and each
//! task's output becomes the next task's input.
//!
//! # Modules
//! - **domain**: `Value`, `Params`, `Output`, `Exit`, error types
//! - **typed**: binding untyped params to typed slots or tuples; task bodies
//! - **ports**: the `Observer` trait and its `Event`s
//! - **impls**: stdout, `tracing` and in-memory observers
//! - **app**: `Pipeline`, `PipelineBuilder`, `PipelineConfig`

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod typed;

pub use app::{Logger, ObserverKind, Pipeline, PipelineBuilder, PipelineConfig, TaskEntry};
pub use domain::{BindError, ConfigError, Exit, Output, Params, TaskError, Value};
pub use impls::{MemoryObserver, StdoutObserver, TracingObserver};
pub use ports::{Event, Observer};
pub use typed::{DynTask, FromParams, Slot, Target, TypedTask, bind};
