//! Configuration handling for patch-credits.
//! Settings come from the command line, an optional configuration file in the
//! project directory, and built-in defaults, in that order of precedence.

use crate::cli::Args;
use crate::constants::{CONFIG_FILES, DEFAULT_OUTPUT, DEFAULT_PATCH_DIR, DEFAULT_TEMPLATE};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of a `patch-credits.{json,yml,yaml}` file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub patch_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub project_dir: PathBuf,
    pub patch_dir: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Default settings for a project directory.
    pub fn new<P: AsRef<Path>>(project_dir: P) -> Self {
        let project_dir = project_dir.as_ref();
        Self {
            project_dir: project_dir.to_path_buf(),
            patch_dir: project_dir.join(DEFAULT_PATCH_DIR),
            template: project_dir.join(DEFAULT_TEMPLATE),
            output: project_dir.join(DEFAULT_OUTPUT),
        }
    }

    /// Resolves the settings for the given command line.
    ///
    /// # Errors
    /// * `Error::ConfigError`, `Error::JsonError` or `Error::YamlError` if the project's
    ///   configuration file exists but can not be read
    pub fn resolve(args: &Args) -> Result<Self> {
        let file_config = load_file_config(&args.project_dir, &CONFIG_FILES)?;
        Ok(Self::from_parts(args, file_config))
    }

    /// Merges command line values over file values over defaults.
    pub fn from_parts(args: &Args, file_config: FileConfig) -> Self {
        let defaults = Self::new(&args.project_dir);
        let project_dir = &args.project_dir;
        let pick = |cli: &Option<PathBuf>, file: Option<PathBuf>, default: PathBuf| {
            cli.clone().or(file).map(|path| project_dir.join(path)).unwrap_or(default)
        };

        Self {
            patch_dir: pick(&args.patch_dir, file_config.patch_dir, defaults.patch_dir),
            template: pick(&args.template, file_config.template, defaults.template),
            output: pick(&args.output, file_config.output, defaults.output),
            project_dir: defaults.project_dir,
        }
    }
}

/// Loads the first configuration file found in the project directory.
///
/// # Arguments
/// * `project_dir` - Directory to look in
/// * `config_files` - Candidate file names, tried in order
///
/// # Returns
/// * `Result<FileConfig>` - Parsed file, or an empty configuration when none exists
///
/// # Errors
/// * `Error::ConfigError` if the file can not be read
/// * `Error::JsonError` / `Error::YamlError` if its content is invalid
pub fn load_file_config<P: AsRef<Path>>(
    project_dir: P,
    config_files: &[&str],
) -> Result<FileConfig> {
    for file in config_files {
        let config_path = project_dir.as_ref().join(file);
        if !config_path.is_file() {
            continue;
        }

        debug!("Loading configuration from {}", config_path.display());
        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            Error::ConfigError(format!("unable to read {}: {}", config_path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(FileConfig::default());
        }

        let is_json = config_path.extension().is_some_and(|ext| ext == "json");
        return if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        };
    }

    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(FileConfig::default())
}
