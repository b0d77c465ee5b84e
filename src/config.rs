//! Configuration handling for localizer-gen.
//! Settings are read from an optional `localizer.json`, `localizer.yml` or
//! `localizer.yaml` file and overridden by command-line arguments.

use crate::cli::Args;
use crate::constants::{CONFIG_FILES, DEFAULT_RUNTIME_CRATE};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glob patterns selecting candidate files, relative to the base directory
    pub includes: Vec<String>,
    /// Glob patterns removing candidates
    pub excludes: Vec<String>,
    /// Only process resource files with exactly this name
    pub file_mask: Option<String>,
    /// Path of the runtime crate referenced by generated code
    pub runtime_crate: String,
    /// Emit successfully generated units even when some files fail
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            excludes: Vec::new(),
            file_mask: None,
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            keep_going: false,
        }
    }
}

impl Config {
    /// Applies command-line overrides. Patterns given on the command line
    /// replace configured ones.
    pub fn merge_args(mut self, args: &Args) -> Self {
        if !args.include.is_empty() {
            self.includes = args.include.clone();
        }
        if !args.exclude.is_empty() {
            self.excludes = args.exclude.clone();
        }
        if args.file_mask.is_some() {
            self.file_mask = args.file_mask.clone();
        }
        if let Some(runtime_crate) = &args.runtime_crate {
            self.runtime_crate = runtime_crate.clone();
        }
        self.keep_going |= args.keep_going;
        self
    }
}

/// Finds the first existing configuration file in a directory.
///
/// # Arguments
/// * `dir` - Directory to search
/// * `config_files` - Candidate file names, in priority order
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| dir.as_ref().join(file))
        .find(|path| path.exists())
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the [`Config`] schema
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads the configuration for a run.
///
/// An explicit `config_path` must exist. Without one, the default
/// configuration files are looked up in `base_dir` and defaults are used
/// when none exists.
pub fn load_config<P: AsRef<Path>>(base_dir: P, config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigError(format!(
                    "configuration file {} does not exist",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match find_config(&base_dir, &CONFIG_FILES) {
            Some(path) => path,
            None => {
                debug!(
                    "No configuration file found (tried: {})",
                    CONFIG_FILES.join(", ")
                );
                return Ok(Config::default());
            }
        },
    };

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(&path)?;
    parse_config(&content)
}
