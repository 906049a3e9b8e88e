//! `assetry generate`: scan the catalog and write the Swift file.

use tracing::{debug, info, instrument};

use assetry_adapters::{LocalFilesystem, ShellLocator, SwiftUiComposer, WalkLocator};
use assetry_core::{
    application::{GenerateRequest, GenerateService, GenerationReport, ports::AssetLocator},
    domain::{Carrier, NamePattern, Namespace},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `generate` command.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let shell = args.shell.clone().or_else(|| config.generator.shell.clone());
    let print_source = args.dry_run || args.stdout;
    let request = build_request(args, &config)?;
    debug!(search_root = ?request.search_root, catalog = %request.catalog_name, "Request built");

    let locator: Box<dyn AssetLocator> = match shell {
        Some(shell) => {
            info!(shell = %shell.display(), "Locating catalog through shell");
            Box::new(ShellLocator::new(shell))
        }
        None => Box::new(WalkLocator::new()),
    };

    let service = GenerateService::new(
        locator,
        Box::new(LocalFilesystem::new()),
        Box::new(SwiftUiComposer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let report = service
        .generate(&request)
        .with_cli_context(|| "generating asset accessors")?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    if print_source {
        // stdout carries only the source; the summary goes to the log
        output.payload(&report.source)?;
        info!(
            written = report.written,
            images = report.images,
            colors = report.colors,
            "Source printed"
        );
        return Ok(());
    }

    report_summary(&report, &output)
}

/// Merge flags over config into a core request.
///
/// Flags win field by field; every value is validated here so a bad
/// `--names` or `--namespace` fails before any directory is read.
fn build_request(args: GenerateArgs, config: &AppConfig) -> CliResult<GenerateRequest> {
    let generator = &config.generator;

    let pattern = NamePattern::new(args.names.as_deref().unwrap_or(&generator.allowed_names))?;
    let namespace = Namespace::new(args.namespace.unwrap_or_else(|| generator.namespace.clone()))?;
    let carriers = generator
        .color_carriers
        .iter()
        .map(|name| Carrier::new(name.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenerateRequest {
        search_root: args.dir.or_else(|| generator.search_dir.clone()),
        catalog_name: args.catalog.unwrap_or_else(|| generator.catalog_name.clone()),
        images_dir: generator.images_dir.clone(),
        colors_dir: generator.colors_dir.clone(),
        namespace,
        pattern,
        carriers,
        output_path: args.output.unwrap_or_else(|| config.output.path.clone()),
        dry_run: args.dry_run,
    })
}

fn report_summary(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    let counts = format!(
        "{} images in {} groups, {} colors in {} groups",
        report.images, report.image_groups, report.colors, report.color_groups
    );

    output.success(&format!("Generated {}", report.output.display()))?;
    output.info(&format!("Catalog: {}", report.catalog.display()))?;
    output.info(&counts)?;
    Ok(())
}
