//! Application layer for Assetry.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, TreeBuilder)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; classification and
//! rendering rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_CATALOG, DEFAULT_OUTPUT, GenerateRequest, GenerateService, GenerationReport,
    TreeBuilder,
};

// Re-export port traits (for adapter implementation)
pub use ports::{AssetLocator, AssetSource, Filesystem, SourceComposer};

pub use error::ApplicationError;
