//! Common constants used throughout localizer-gen.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["localizer.json", "localizer.yml", "localizer.yaml"];

/// Suffix of resource files that produce a unit
pub const RESOURCE_SUFFIX: &str = ".properties";

/// Marks locale-specific siblings such as `Messages_fr.properties`
pub const LOCALE_MARKER: char = '_';

/// Extension of generated source files
pub const OUTPUT_SUFFIX: &str = "rs";

/// Default include pattern when none is configured
pub const DEFAULT_INCLUDE: &str = "**/*.properties";

/// Path of the runtime crate generated code refers to
pub const DEFAULT_RUNTIME_CRATE: &str = "::localizer";

/// Name of the per-unit holder static
pub const HOLDER_NAME: &str = "HOLDER";
