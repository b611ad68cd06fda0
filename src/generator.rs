//! The generation pipeline: scan the patch directory, assemble the credits model,
//! render it with the project's template and write the result.

use crate::config::Config;
use crate::credits::CreditsModel;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::scanner::{scan_patches, ScanFailure, ScanReport};
use log::info;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Why a run finished without writing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingTemplate(PathBuf),
    MissingPatchDirectory(PathBuf),
    NoPatches(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingTemplate(path) => {
                write!(f, "Unable to find template at '{}'! Skipping!", path.display())
            }
            SkipReason::MissingPatchDirectory(path) => {
                write!(f, "Unable to find patch directory at '{}'! Skipping!", path.display())
            }
            SkipReason::NoPatches(path) => {
                write!(f, "Unable to find any patches in '{}'! Skipping!", path.display())
            }
        }
    }
}

/// Result of a successful run.
#[derive(Debug)]
pub enum Outcome {
    /// The output file was (re)written.
    Generated {
        output: PathBuf,
        /// Number of patches in the document
        patches: usize,
        /// Patch files left out because they could not be parsed
        failures: Vec<ScanFailure>,
    },
    /// Nothing was written. This is not an error.
    Skipped(SkipReason),
}

/// Runs the whole pipeline once.
///
/// # Arguments
/// * `config` - Resolved settings
/// * `renderer` - Engine used to render the template
///
/// # Returns
/// * `Result<Outcome>` - `Skipped` when the template, the patch directory or any
///   patch is missing; `Generated` once the output file has been written
///
/// # Errors
/// * `Error::IoError` if the template can not be read
/// * `Error::MinijinjaError` if rendering fails
/// * `Error::OutputError` if the output file can not be written
pub fn generate(config: &Config, renderer: &dyn TemplateRenderer) -> Result<Outcome> {
    if !config.template.is_file() {
        return Ok(Outcome::Skipped(SkipReason::MissingTemplate(config.template.clone())));
    }
    if !config.patch_dir.is_dir() {
        return Ok(Outcome::Skipped(SkipReason::MissingPatchDirectory(config.patch_dir.clone())));
    }

    info!("Scanning '{}' for patches!", config.patch_dir.display());
    let ScanReport { records, failures } = scan_patches(&config.patch_dir);

    let Some(model) = CreditsModel::assemble(records) else {
        return Ok(Outcome::Skipped(SkipReason::NoPatches(config.patch_dir.clone())));
    };
    info!("Found {} patches", model.len());

    let template = fs::read_to_string(&config.template)?;
    let content = renderer.render(&template, &model.context()?)?;
    write_output(&config.output, &content)?;
    info!("Wrote credits to '{}'", config.output.display());

    Ok(Outcome::Generated { output: config.output.clone(), patches: model.len(), failures })
}

/// Replaces `path` with `content`.
///
/// The content goes to a temporary file next to the destination first, which is then
/// moved over it, so an interrupted run never leaves a half-written document.
///
/// # Errors
/// * `Error::OutputError` if any step fails
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let output_error = |source: io::Error| Error::OutputError { path: path.to_path_buf(), source };

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    fs::create_dir_all(parent).map_err(output_error)?;

    let mut file = NamedTempFile::new_in(parent).map_err(output_error)?;
    file.write_all(content.as_bytes()).map_err(output_error)?;
    file.persist(path).map_err(|e| output_error(e.error))?;
    Ok(())
}
