//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `assetry-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `AssetSource`: Directory listing
//!   - `AssetLocator`: Catalog discovery
//!   - `Filesystem`: File writes
//!   - `SourceComposer`: Final file layout
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{AssetLocator, AssetSource, Filesystem, SourceComposer};

#[cfg(test)]
pub use output::{MockAssetLocator, MockAssetSource, MockFilesystem, MockSourceComposer};
