//! Error handling for patch-credits.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning patches or generating the credits file.
///
/// Per-file problems (`DecodingError`, `ParseError`) are collected by the scanner and
/// reported as warnings. Only configuration and output errors abort a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A header value could not be decoded from its MIME encoded-word form
    #[error("Failed to decode header value '{value}': {reason}.")]
    DecodingError { value: String, reason: String },

    /// A single patch file could not be parsed
    #[error("Failed to parse patch '{}': {source}", .path.display())]
    ParseError { path: PathBuf, source: Box<Error> },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The generated file could not be written
    #[error("Error while writing the output file '{}': {source}.", .path.display())]
    OutputError { path: PathBuf, source: io::Error },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn decoding(value: &str, reason: impl Into<String>) -> Self {
        Error::DecodingError { value: value.to_string(), reason: reason.into() }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
