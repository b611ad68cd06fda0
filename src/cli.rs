//! Command-line interface implementation for patch-credits.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for patch-credits.
///
/// Relative paths are resolved against the project directory. Options left out fall
/// back to the project's configuration file and then to the built-in defaults.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "patch-credits: generate a credits document from a directory of patch files",
    long_about = None
)]
pub struct Args {
    /// Root directory of the project
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Directory scanned for *.patch files [default: <PROJECT_DIR>/patches]
    #[arg(long, value_name = "DIR")]
    pub patch_dir: Option<PathBuf>,

    /// Template the credits are rendered with [default: .template.md]
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// File the rendered credits are written to [default: PATCHES.md]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
