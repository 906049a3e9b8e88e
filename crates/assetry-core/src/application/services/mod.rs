//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the asset accessors".

pub mod generate_service;
pub mod tree_builder;

pub use generate_service::{
    DEFAULT_CATALOG, DEFAULT_OUTPUT, GenerateRequest, GenerateService, GenerationReport,
};
pub use tree_builder::TreeBuilder;
