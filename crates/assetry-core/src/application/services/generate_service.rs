//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Locate the asset catalog below the search root
//! 2. Build the images and colors trees
//! 3. Compose the source file
//! 4. Write it (unless this is a dry run)
//!
//! Either both trees are valid and one complete file is written, or nothing
//! is written at all.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{AssetLocator, AssetSource, Filesystem, SourceComposer},
        services::TreeBuilder,
    },
    domain::{AssetKind, Carrier, DomainError, NamePattern, Namespace},
    error::AssetryResult,
};

/// Default name of the catalog directory searched for.
pub const DEFAULT_CATALOG: &str = "Assets.xcassets";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "./Assets.swift";

/// Everything one generation run needs to know.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Directory searched for the catalog.
    pub search_root: Option<PathBuf>,
    /// Catalog directory name, e.g. `Assets.xcassets`.
    pub catalog_name: String,
    pub images_dir: String,
    pub colors_dir: String,
    pub namespace: Namespace,
    pub pattern: NamePattern,
    /// One colors block is emitted per carrier, in this order.
    pub carriers: Vec<Carrier>,
    pub output_path: PathBuf,
    /// Compose but do not write.
    pub dry_run: bool,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            search_root: None,
            catalog_name: DEFAULT_CATALOG.to_string(),
            images_dir: AssetKind::Images.default_root().to_string(),
            colors_dir: AssetKind::Colors.default_root().to_string(),
            namespace: Namespace::default(),
            pattern: NamePattern::default(),
            carriers: Carrier::defaults(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
        }
    }
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub catalog: PathBuf,
    pub output: PathBuf,
    pub images: usize,
    pub image_groups: usize,
    pub colors: usize,
    pub color_groups: usize,
    pub carriers: Vec<String>,
    pub bytes: usize,
    pub written: bool,
    #[serde(skip)]
    pub source: String,
}

/// Main generation service.
pub struct GenerateService {
    locator: Box<dyn AssetLocator>,
    source: Box<dyn AssetSource>,
    composer: Box<dyn SourceComposer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use assetry_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     locator,    // impl AssetLocator
    ///     source,     // impl AssetSource
    ///     composer,   // impl SourceComposer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        locator: Box<dyn AssetLocator>,
        source: Box<dyn AssetSource>,
        composer: Box<dyn SourceComposer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            locator,
            source,
            composer,
            filesystem,
        }
    }

    /// Run the whole pipeline for `request`.
    #[instrument(
        skip_all,
        fields(
            catalog = %request.catalog_name,
            output = %request.output_path.display(),
            dry_run = request.dry_run
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> AssetryResult<GenerationReport> {
        // 1. Validate request
        let search_root = request
            .search_root
            .as_deref()
            .ok_or(ApplicationError::MissingSearchRoot)?;
        if !self.source.is_dir(search_root) {
            return Err(ApplicationError::SearchRootNotFound {
                path: search_root.to_path_buf(),
            }
            .into());
        }
        if request.carriers.is_empty() {
            return Err(DomainError::NoCarriers.into());
        }

        // 2. Locate catalog
        let catalog = self.locate(search_root, &request.catalog_name)?;
        info!(catalog = %catalog.display(), "Asset catalog found");

        // 3. Build trees
        let builder = TreeBuilder::new(self.source.as_ref(), &request.pattern);
        let images = builder.build_group(AssetKind::Images, &catalog, &request.images_dir)?;
        let colors = builder.build_group(AssetKind::Colors, &catalog, &request.colors_dir)?;
        info!(
            images = images.content_count(),
            colors = colors.content_count(),
            "Asset trees built"
        );

        // 4. Compose
        let source = self.composer.compose(
            &images,
            &colors,
            &request.namespace,
            &request.carriers,
        )?;

        // 5. Write
        let written = if request.dry_run {
            false
        } else {
            self.write_output(&request.output_path, &source)?;
            info!("Generated source written");
            true
        };

        Ok(GenerationReport {
            catalog,
            output: request.output_path.clone(),
            images: images.content_count(),
            image_groups: images.group_count(),
            colors: colors.content_count(),
            color_groups: colors.group_count(),
            carriers: request.carriers.iter().map(|c| c.to_string()).collect(),
            bytes: source.len(),
            written,
            source,
        })
    }

    /// Find the catalog directory below `search_root`.
    pub fn locate(&self, search_root: &Path, catalog: &str) -> AssetryResult<PathBuf> {
        self.locator
            .locate(search_root, catalog)?
            .ok_or_else(|| {
                ApplicationError::AssetsNotFound {
                    search_root: search_root.to_path_buf(),
                    catalog: catalog.to_string(),
                }
                .into()
            })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_output(&self, path: &Path, content: &str) -> AssetryResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockAssetLocator, MockAssetSource, MockFilesystem, MockSourceComposer,
    };
    use crate::error::{AssetryError, ErrorCategory};
    use std::collections::HashMap;

    fn listing_source(listings: &[(&str, &[&str])]) -> MockAssetSource {
        let table: HashMap<PathBuf, Vec<String>> = listings
            .iter()
            .map(|(p, e)| (PathBuf::from(p), e.iter().map(|s| s.to_string()).collect()))
            .collect();
        let mut dirs = table.clone();
        dirs.entry(PathBuf::from("/p")).or_default();
        let mut source = MockAssetSource::new();
        source.expect_list_dir().returning(move |path| {
            Ok(table.get(path).cloned().unwrap_or_default())
        });
        source
            .expect_is_dir()
            .returning(move |path| dirs.contains_key(path));
        source
    }

    fn full_catalog() -> MockAssetSource {
        listing_source(&[
            ("/p/Assets.xcassets/Images", &["Icons"]),
            (
                "/p/Assets.xcassets/Images/Icons",
                &["home.imageset", "back.imageset"],
            ),
            ("/p/Assets.xcassets/Colors", &["Brand"]),
            ("/p/Assets.xcassets/Colors/Brand", &["primary.colorset"]),
        ])
    }

    fn found_locator() -> MockAssetLocator {
        let mut locator = MockAssetLocator::new();
        locator
            .expect_locate()
            .returning(|_, _| Ok(Some(PathBuf::from("/p/Assets.xcassets"))));
        locator
    }

    fn echo_composer() -> MockSourceComposer {
        let mut composer = MockSourceComposer::new();
        composer
            .expect_compose()
            .returning(|images, colors, ns, carriers| {
                Ok(format!(
                    "{}:{}:{}:{}",
                    ns,
                    images.content_count(),
                    colors.content_count(),
                    carriers.len()
                ))
            });
        composer
    }

    fn request() -> GenerateRequest {
        GenerateRequest {
            search_root: Some(PathBuf::from("/p")),
            output_path: PathBuf::from("/out/Assets.swift"),
            ..GenerateRequest::default()
        }
    }

    #[test]
    fn generates_and_writes_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("/out/Assets.swift") && content == "app:2:1:2")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(
            Box::new(found_locator()),
            Box::new(full_catalog()),
            Box::new(echo_composer()),
            Box::new(fs),
        );
        let report = service.generate(&request()).unwrap();

        assert!(report.written);
        assert_eq!(report.images, 2);
        assert_eq!(report.image_groups, 1);
        assert_eq!(report.colors, 1);
        assert_eq!(report.carriers, vec!["Color", "UIColor"]);
        assert_eq!(report.catalog, PathBuf::from("/p/Assets.xcassets"));
    }

    #[test]
    fn creates_missing_output_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/out"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = GenerateService::new(
            Box::new(found_locator()),
            Box::new(full_catalog()),
            Box::new(echo_composer()),
            Box::new(fs),
        );
        assert!(service.generate(&request()).is_ok());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let service = GenerateService::new(
            Box::new(found_locator()),
            Box::new(full_catalog()),
            Box::new(echo_composer()),
            Box::new(fs),
        );
        let report = service
            .generate(&GenerateRequest {
                dry_run: true,
                ..request()
            })
            .unwrap();

        assert!(!report.written);
        assert_eq!(report.source, "app:2:1:2");
    }

    #[test]
    fn missing_catalog_writes_nothing() {
        let mut locator = MockAssetLocator::new();
        locator.expect_locate().returning(|_, _| Ok(None));
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();

        let service = GenerateService::new(
            Box::new(locator),
            Box::new(listing_source(&[])),
            Box::new(MockSourceComposer::new()),
            Box::new(fs),
        );
        let err = service.generate(&request()).unwrap_err();

        assert!(matches!(
            err,
            AssetryError::Application(ApplicationError::AssetsNotFound { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn missing_images_group_writes_nothing() {
        let source = listing_source(&[
            ("/p/Assets.xcassets/Colors", &["primary.colorset"]),
        ]);
        let mut composer = MockSourceComposer::new();
        composer.expect_compose().never();
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();

        let service = GenerateService::new(
            Box::new(found_locator()),
            Box::new(source),
            Box::new(composer),
            Box::new(fs),
        );
        let err = service.generate(&request()).unwrap_err();

        assert!(err.is_structural());
    }

    #[test]
    fn empty_images_group_writes_nothing() {
        let source = listing_source(&[
            ("/p/Assets.xcassets/Images", &["Contents.json"]),
            ("/p/Assets.xcassets/Colors", &["primary.colorset"]),
        ]);
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();

        let service = GenerateService::new(
            Box::new(found_locator()),
            Box::new(source),
            Box::new(MockSourceComposer::new()),
            Box::new(fs),
        );
        let err = service.generate(&request()).unwrap_err();

        assert!(matches!(
            err,
            AssetryError::Application(ApplicationError::AssetGroupEmpty {
                kind: AssetKind::Images,
                ..
            })
        ));
    }

    #[test]
    fn missing_search_root_fails_before_lookup() {
        let mut locator = MockAssetLocator::new();
        locator.expect_locate().never();

        let service = GenerateService::new(
            Box::new(locator),
            Box::new(MockAssetSource::new()),
            Box::new(MockSourceComposer::new()),
            Box::new(MockFilesystem::new()),
        );
        let err = service
            .generate(&GenerateRequest::default())
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn nonexistent_search_root_is_configuration_error() {
        let mut locator = MockAssetLocator::new();
        locator.expect_locate().never();
        let mut source = MockAssetSource::new();
        source.expect_is_dir().return_const(false);

        let service = GenerateService::new(
            Box::new(locator),
            Box::new(source),
            Box::new(MockSourceComposer::new()),
            Box::new(MockFilesystem::new()),
        );
        let err = service.generate(&request()).unwrap_err();

        assert!(matches!(
            err,
            AssetryError::Application(ApplicationError::SearchRootNotFound { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn empty_carrier_list_is_configuration_error() {
        let mut locator = MockAssetLocator::new();
        locator.expect_locate().never();

        let service = GenerateService::new(
            Box::new(locator),
            Box::new(listing_source(&[])),
            Box::new(MockSourceComposer::new()),
            Box::new(MockFilesystem::new()),
        );
        let err = service
            .generate(&GenerateRequest {
                carriers: Vec::new(),
                ..request()
            })
            .unwrap_err();

        assert!(matches!(err, AssetryError::Domain(DomainError::NoCarriers)));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let service = GenerateService::new(
            Box::new(found_locator()),
            Box::new(full_catalog()),
            Box::new(echo_composer()),
            Box::new(fs),
        );
        let err = service.generate(&request()).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
