//! Assetry Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Assetry
//! asset catalog code generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           assetry-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerateService, TreeBuilder)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Source, Locator, Filesystem, Composer) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    assetry-adapters (Infrastructure)    │
//! │ (LocalFilesystem, WalkLocator, SwiftUi) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │     (Node, classify, render policies)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use assetry_core::application::{GenerateRequest, GenerateService};
//!
//! // 1. Describe the run
//! let request = GenerateRequest {
//!     search_root: Some("./MyApp".into()),
//!     ..GenerateRequest::default()
//! };
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(locator, source, composer, filesystem);
//! let report = service.generate(&request).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateRequest, GenerateService, GenerationReport, TreeBuilder,
        ports::{AssetLocator, AssetSource, Filesystem, SourceComposer},
    };
    pub use crate::domain::{
        AssetKind, Carrier, ColorsPolicy, ImagesPolicy, NamePattern, Namespace, Node, NodeKind,
        RenderPolicy,
    };
    pub use crate::error::{AssetryError, AssetryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
