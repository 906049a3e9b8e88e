//! Infrastructure adapters for Assetry.
//!
//! This crate implements the ports defined in `assetry-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod locator;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use locator::{ShellLocator, WalkLocator};
pub use renderer::SwiftUiComposer;
