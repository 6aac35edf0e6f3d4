#![doc = include_str!("../README.md")]

use fs_err as fs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up next to the top-level `.flt` file.
pub const CONFIG_FILE_NAME: &str = "flt.toml";

pub const DEFAULT_VIVADO_VERSION: &str = "2022.1";
pub const DEFAULT_PART: &str = "xc7z020-clg484-1";
pub const DEFAULT_PROJECT_DIR: &str = ".";
pub const DEFAULT_BUILD_DIR: &str = "vivado_build";

#[derive(Debug, Error)]
pub enum FltConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings substituted into the generated Vivado project files.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FltConfig {
    /// Project name. When absent the stem of the top-level `.flt` file is used.
    pub project_name: Option<String>,
    /// Vivado release the generated scripts target.
    pub vivado_version: String,
    /// FPGA part number passed to `create_project`.
    pub part: String,
    /// Project directory, relative to the build directory.
    pub project_dir: String,
    /// Build directory, relative to the top-level `.flt` file.
    pub build_dir: PathBuf,
}

impl Default for FltConfig {
    fn default() -> Self {
        Self {
            project_name: None,
            vivado_version: DEFAULT_VIVADO_VERSION.to_string(),
            part: DEFAULT_PART.to_string(),
            project_dir: DEFAULT_PROJECT_DIR.to_string(),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
        }
    }
}

impl FltConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, FltConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(FltConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;

        let config: FltConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Reads `flt.toml` from `dir`, falling back to the defaults when the
    /// file does not exist.
    pub fn from_manifest_dir(dir: &Path) -> Result<Self, FltConfigError> {
        match Self::read_from_path(dir.join(CONFIG_FILE_NAME)) {
            Err(FltConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Returns the build directory resolved against `base_dir`.
    pub fn build_dir_from_base(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.build_dir)
    }

    /// Returns the configured project name, or `fallback` when none is set.
    pub fn project_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.project_name.as_deref().unwrap_or(fallback)
    }
}
