//! Error handling for localizer-gen.
//! Defines the error types and results used throughout the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::format::FormatError;

/// Errors that can occur while generating message accessors.
///
/// Per-file errors are wrapped in [`Error::ResourceError`] by the generator so
/// the offending resource file is always identified.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Generation of one resource file failed.
    #[error("Failed to generate a unit from {}: {source}", path.display())]
    ResourceError {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// A resource file could not be parsed as a property file.
    #[error("Properties error on line {line}: {reason}.")]
    PropertiesError { line: usize, reason: String },

    /// A message template is malformed for the substitution engine.
    #[error("Template syntax error in key '{key}' ({template:?}): {source}.")]
    TemplateSyntaxError {
        key: String,
        template: String,
        #[source]
        source: FormatError,
    },

    /// Two resource files map onto the same unit name.
    #[error("Unit name collision: '{unit}' is produced by both {} and {}.", first.display(), second.display())]
    NameCollision {
        unit: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A resource path does not yield a usable unit name.
    #[error("Invalid unit name '{0}' derived from the resource path.")]
    InvalidUnitName(String),

    /// The output directory or a generated file could not be written.
    #[error("Failed to write {}: {source}.", path.display())]
    EmitError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The emission template failed to render.
    #[error("Render error: {0}.")]
    RenderError(#[from] minijinja::Error),

    /// Some resource files failed while the run kept going.
    #[error("{0} resource file(s) failed to generate.")]
    GenerationFailed(usize),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Invalid include/exclude pattern.
    #[error("Glob error: {0}.")]
    GlobError(#[from] globset::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
