// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Assetry.
//!
//! This module contains pure logic: the asset tree, entry classification,
//! identifier casing, and the Swift renderer. Directory listing and file
//! writing are reached only through the ports in `crate::application`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or network calls
//! - **Immutable entities**: A tree never changes after it is built
//!
// Public API - what the world sees
pub mod classify;
pub mod entities;
pub mod error;
pub mod naming;
pub mod render;
pub mod value_objects;

// Re-exports for convenience
pub use classify::{Classification, classify};
pub use entities::{Node, NodeKind};
pub use error::DomainError;
pub use render::{ColorsPolicy, ImagesPolicy, RenderPolicy, render};
pub use value_objects::{
    AssetKind, Carrier, DEFAULT_NAME_PATTERN, DEFAULT_NAMESPACE, NamePattern, Namespace,
};
