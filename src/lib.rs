//! patch-credits turns a directory of patch files into a credits document.
//! It reads the author, subject and co-authors of every patch, sorts them by
//! subject and renders them with a project template.

/// Command-line interface module
pub mod cli;

/// Settings from the command line, the project configuration file and defaults
/// Supports JSON and YAML formats (patch-credits.json, patch-credits.yml, patch-credits.yaml)
pub mod config;

pub mod constants;

/// Sorting of parsed patches into the render-ready model
pub mod credits;

/// MIME encoded-word decoding of header values
pub mod decoder;

/// Error types and handling
pub mod error;

/// Scan, assemble, render and write, in one pass
pub mod generator;

pub mod logger;

/// Header extraction from a single patch file
pub mod patch;

/// Template rendering
pub mod renderer;

/// Recursive patch discovery
/// Skips directories named `removed`
pub mod scanner;
