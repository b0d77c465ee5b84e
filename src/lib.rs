//! localizer-gen generates typed message accessors from `.properties` bundles.
//! Every locale-neutral resource file becomes one Rust source file with an
//! eager and a deferred accessor per message key.

/// Argument-count inference for message templates
pub mod arity;

/// Command-line interface module for the localizer-gen application
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (localizer.json, localizer.yml, localizer.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the localizer-gen application
pub mod error;

/// Message template substitution engine
pub mod format;

/// Run orchestration: filtering, freshness checks and unit assembly
pub mod generator;

/// Logger initialization
pub mod logger;

/// In-memory code model accumulating units for one run
pub mod model;

/// Unit and accessor naming
pub mod naming;

/// Property file parsing
pub mod properties;

/// Emission backend rendering units to source files
pub mod renderer;

/// Candidate resource file discovery
pub mod scanner;
