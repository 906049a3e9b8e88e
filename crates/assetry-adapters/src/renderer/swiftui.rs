//! SwiftUI source file layout.

use tracing::{debug, instrument};

use assetry_core::{
    application::ports::SourceComposer,
    domain::{Carrier, ColorsPolicy, ImagesPolicy, Namespace, Node, render},
    error::AssetryResult,
};

const HEADER: &str = "// Generated by assetry. Do not edit.\n";

const INITS: &str = "\
// MARK: - Inits

extension UIImage {
\tconvenience init<T: RawRepresentable>(_ asset: T) where T.RawValue == String {
\t\tself.init(named: asset.rawValue)!
\t}
}

extension Image {
\tinit<T: RawRepresentable>(_ asset: T) where T.RawValue == String {
\t\tself.init(asset.rawValue)
\t}
}

extension UIColor {
\tconvenience init(_ name: String) {
\t\tself.init(named: name)!
\t}
}
";

/// Lays out the images struct and one colors extension per carrier behind
/// the fixed `UIImage`/`Image`/`UIColor` initializers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftUiComposer;

impl SwiftUiComposer {
    pub fn new() -> Self {
        Self
    }
}

impl SourceComposer for SwiftUiComposer {
    #[instrument(skip_all, fields(namespace = %namespace, carriers = carriers.len()))]
    fn compose(
        &self,
        images: &Node,
        colors: &Node,
        namespace: &Namespace,
        carriers: &[Carrier],
    ) -> AssetryResult<String> {
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');
        out.push_str("import SwiftUI\n\n");
        out.push_str(INITS);
        out.push('\n');
        out.push_str("// MARK: - Extensions\n\n");

        out.push_str("struct Images {\n");
        out.push_str(&render(images, namespace, &ImagesPolicy));
        out.push_str("}\n");

        for carrier in carriers {
            out.push('\n');
            out.push_str(&format!("extension {carrier} {{\n"));
            out.push_str(&render(colors, namespace, &ColorsPolicy::new(carrier.clone())));
            out.push_str("}\n");
        }

        debug!(bytes = out.len(), "Composed source");
        Ok(out)
    }
}
