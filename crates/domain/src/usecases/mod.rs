//! Application use cases

pub mod pipeline;

pub use pipeline::{Pipeline, PipelineConfig, PipelineError};
