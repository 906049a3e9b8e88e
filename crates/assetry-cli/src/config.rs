//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`GenerateRequest`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `ASSETRY_GENERATOR__NAMESPACE=assets`
//! 3. Config file: `--config`, else `.assetry.toml` in the CWD layered over
//!    the platform config file
//! 4. Built-in defaults (always present)
//!
//! [`GenerateRequest`]: assetry_core::application::GenerateRequest

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use assetry_core::application::{DEFAULT_CATALOG, DEFAULT_OUTPUT};
use assetry_core::domain::{AssetKind, Carrier, DEFAULT_NAME_PATTERN, DEFAULT_NAMESPACE};

/// File name of the per-project config.
pub const LOCAL_CONFIG_FILE: &str = ".assetry.toml";

const ENV_PREFIX: &str = "ASSETRY";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation defaults.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory searched for the catalog when `--dir` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_dir: Option<PathBuf>,
    pub namespace: String,
    pub catalog_name: String,
    pub images_dir: String,
    pub colors_dir: String,
    pub allowed_names: String,
    pub color_carriers: Vec<String>,
    /// Locate the catalog through this shell instead of walking in-process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub no_color: bool,
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            search_dir: None,
            namespace: DEFAULT_NAMESPACE.into(),
            catalog_name: DEFAULT_CATALOG.into(),
            images_dir: AssetKind::Images.default_root().into(),
            colors_dir: AssetKind::Colors.default_root().into(),
            allowed_names: DEFAULT_NAME_PATTERN.into(),
            color_carriers: Carrier::defaults()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            shell: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
            }
            None => {
                if let Some(global) = Self::global_config_path() {
                    builder = builder.add_source(
                        File::from(global.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
                builder = builder.add_source(
                    File::from(Path::new(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("generator.color_carriers")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Path of the configuration file that applies to this invocation.
    ///
    /// An explicit `--config` wins, then `.assetry.toml` if it exists in the
    /// current directory, then the platform location.
    pub fn config_path(explicit: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = explicit {
            return path.clone();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return local;
        }
        Self::global_config_path().unwrap_or(local)
    }

    /// Platform config file, e.g. `~/.config/assetry/config.toml`.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "assetry", "assetry")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
