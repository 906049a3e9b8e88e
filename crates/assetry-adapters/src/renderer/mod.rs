//! Source composers.

mod swiftui;

pub use swiftui::SwiftUiComposer;
