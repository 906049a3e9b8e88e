//! Generation service wired to the in-memory filesystem and the SwiftUI composer.

use std::path::{Path, PathBuf};

use assetry_adapters::{MemoryFilesystem, SwiftUiComposer};
use assetry_core::{
    application::{GenerateRequest, GenerateService, ports::AssetLocator},
    error::AssetryResult,
};

struct At(PathBuf);

impl AssetLocator for At {
    fn locate(&self, _search_root: &Path, _catalog: &str) -> AssetryResult<Option<PathBuf>> {
        Ok(Some(self.0.clone()))
    }
}

fn service(fs: &MemoryFilesystem) -> GenerateService {
    GenerateService::new(
        Box::new(At(PathBuf::from("App/Assets.xcassets"))),
        Box::new(fs.clone()),
        Box::new(SwiftUiComposer::new()),
        Box::new(fs.clone()),
    )
}

fn request(output: &str) -> GenerateRequest {
    GenerateRequest {
        search_root: Some(PathBuf::from("App")),
        output_path: PathBuf::from(output),
        ..GenerateRequest::default()
    }
}

#[test]
fn writes_composed_file_in_listing_order() {
    let fs = MemoryFilesystem::with_dirs([
        "App/Assets.xcassets/Images/Icons/home.imageset",
        "App/Assets.xcassets/Images/Icons/back.imageset",
        "App/Assets.xcassets/Colors/Brand/primary.colorset",
        "Generated",
    ]);

    let report = service(&fs).generate(&request("Generated/Assets.swift")).unwrap();
    assert!(report.written);
    assert_eq!(report.images, 2);

    let written = fs.read_file(Path::new("Generated/Assets.swift")).unwrap();
    assert_eq!(written, report.source);
    assert!(written.contains("\t\t\tcase home\n\t\t\tcase back\n"));
    assert!(written.contains("extension Color {\n\tenum app {\n"));
}

#[test]
fn missing_output_parent_is_created() {
    let fs = MemoryFilesystem::with_dirs([
        "App/Assets.xcassets/Images/logo.imageset",
        "App/Assets.xcassets/Colors/accent.colorset",
    ]);

    service(&fs).generate(&request("Sources/Gen/Assets.swift")).unwrap();
    assert!(fs.read_file(Path::new("Sources/Gen/Assets.swift")).is_some());
}

#[test]
fn unreadable_nested_group_is_skipped() {
    let fs = MemoryFilesystem::with_dirs([
        "App/Assets.xcassets/Images/Locked/secret.imageset",
        "App/Assets.xcassets/Images/logo.imageset",
        "App/Assets.xcassets/Colors/accent.colorset",
    ]);
    fs.mark_unreadable(Path::new("App/Assets.xcassets/Images/Locked"));

    let report = service(&fs).generate(&request("Assets.swift")).unwrap();
    assert_eq!(report.images, 1);
    assert!(!report.source.contains("locked"));
}

#[test]
fn dry_run_leaves_filesystem_untouched() {
    let fs = MemoryFilesystem::with_dirs([
        "App/Assets.xcassets/Images/logo.imageset",
        "App/Assets.xcassets/Colors/accent.colorset",
    ]);

    let report = service(&fs)
        .generate(&GenerateRequest {
            dry_run: true,
            ..request("Assets.swift")
        })
        .unwrap();

    assert!(!report.written);
    assert!(fs.list_files().is_empty());
}
