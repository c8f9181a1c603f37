//! requote domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Domain entities and value objects
//! - `scoring`: Engagement scoring and post selection
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: The single-run pipeline orchestration

pub mod model;
pub mod ports;
pub mod scoring;
pub mod usecases;

pub use model::*;
pub use ports::*;
