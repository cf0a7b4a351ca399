//! Generator configuration file

use anyhow::{Context, Result};
use ddlforge_templates::{DEFAULT_PACKAGE_NAME, GenerationOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`; every key is optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package used when `--package` is not given
    pub default_package_name: String,
    pub author: String,
    pub version: String,
    /// Directory of template files that replace bundled ones by name
    pub templates_dir: Option<PathBuf>,
    /// Project root used by `generate` when `--out` is not given
    pub output_dir: Option<PathBuf>,
    /// Also write JSON logs to the log directory
    pub log_json: bool,
    /// File the settings were read from; `None` for built-in defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            default_package_name: DEFAULT_PACKAGE_NAME.to_string(),
            author: options.author,
            version: options.version,
            templates_dir: None,
            output_dir: None,
            log_json: false,
            source: None,
        }
    }
}

impl GeneratorConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one the default location is
    /// used, and a missing file there means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        // No config directory or no file there means defaults
        match config_file() {
            Ok(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(Self {
            source: Some(path.to_path_buf()),
            ..config
        })
    }

    /// Report where the settings came from; call once logging is installed
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => tracing::debug!(path = %path.display(), "Loaded config"),
            None => tracing::debug!("No config file, using defaults"),
        }
    }

    /// Generation options for this config, with `package` taking precedence
    /// over the configured default when it is not blank
    pub fn generation_options(&self, package: Option<&str>) -> GenerationOptions {
        let mut options = GenerationOptions::new(self.default_package_name.clone())
            .with_package(package)
            .with_author(self.author.clone())
            .with_version(self.version.clone());
        if let Some(dir) = &self.templates_dir {
            options = options.with_templates_dir(dir);
        }
        options
    }
}

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("ddlforge"))
}

pub fn config_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}
