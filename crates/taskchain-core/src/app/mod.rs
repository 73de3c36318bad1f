//! App - the pipeline itself and how it is assembled
//!
//! # Main components
//! - **Pipeline**: sequential task driver (`run`)
//! - **PipelineBuilder**: wiring of tasks, debug mode and observer
//! - **PipelineConfig**: serde-loadable settings for the builder

pub mod builder;
pub mod config;
pub mod pipeline;

pub use self::builder::PipelineBuilder;
pub use self::config::{ObserverKind, PipelineConfig};
pub use self::pipeline::{Logger, Pipeline, TaskEntry};
