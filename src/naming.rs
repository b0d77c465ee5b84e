//! Name derivation for generated units and accessors.

use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::constants::{LOCALE_MARKER, OUTPUT_SUFFIX, RESOURCE_SUFFIX};

/// Maps a resource key to its eager accessor identifier.
///
/// Separator dots become underscores. Keys containing characters that are
/// not valid in Rust identifiers are passed through unchanged.
pub fn to_identifier(key: &str) -> String {
    key.replace('.', "_")
}

/// Maps a resource key to its deferred accessor identifier.
pub fn to_deferred_identifier(key: &str) -> String {
    format!("_{}", to_identifier(key))
}

/// Maps a resource file's relative path to a fully-qualified unit name,
/// e.g. `org/example/Messages.properties` to `org.example.Messages`.
pub fn to_unit_name(relative_path: &str) -> String {
    let stem = relative_path
        .strip_suffix(RESOURCE_SUFFIX)
        .unwrap_or(relative_path);
    stem.chars()
        .map(|c| if c == MAIN_SEPARATOR || c == '/' { '.' } else { c })
        .collect()
}

/// Path of a unit's generated source file, relative to the output directory.
pub fn unit_file_path(unit_name: &str) -> PathBuf {
    let mut path: PathBuf = unit_name.split('.').collect();
    path.set_extension(OUTPUT_SUFFIX);
    path
}

/// Returns true for locale-neutral resource file names, e.g. `Messages.properties`
/// but not `Messages_fr.properties` or a bare `.properties`.
pub fn is_resource_file(file_name: &str) -> bool {
    match file_name.strip_suffix(RESOURCE_SUFFIX) {
        Some(stem) => !stem.is_empty() && !file_name.contains(LOCALE_MARKER),
        None => false,
    }
}

/// A unit name is usable when none of its dot-separated segments is empty.
pub fn is_valid_unit_name(unit_name: &str) -> bool {
    unit_name.split('.').all(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_file_path() {
        assert_eq!(
            unit_file_path("org.example.Messages"),
            PathBuf::from("org/example/Messages.rs")
        );
        assert_eq!(unit_file_path("Messages"), PathBuf::from("Messages.rs"));
    }
}
