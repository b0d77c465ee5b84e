//! Candidate resource file discovery.
//! Walks a base directory and keeps relative paths selected by include and
//! exclude glob patterns.

use crate::constants::DEFAULT_INCLUDE;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Compiles a list of glob patterns into a set.
///
/// # Errors
/// * `Error::GlobError` if a pattern is invalid
pub fn build_glob_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern.as_ref())?);
    }
    Ok(builder.build()?)
}

/// Lists files under `base_dir` matching any include pattern and no exclude
/// pattern, as paths relative to `base_dir` in file name order.
///
/// # Arguments
/// * `base_dir` - Directory to walk
/// * `includes` - Include patterns; `**/*.properties` when empty
/// * `excludes` - Exclude patterns
pub fn scan<P: AsRef<Path>, S: AsRef<str>>(
    base_dir: P,
    includes: &[S],
    excludes: &[S],
) -> Result<Vec<String>> {
    let base_dir = base_dir.as_ref();
    let includes = if includes.is_empty() {
        build_glob_set(&[DEFAULT_INCLUDE])?
    } else {
        build_glob_set(includes)?
    };
    let excludes = build_glob_set(excludes)?;

    let mut found = Vec::new();
    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(base_dir)
            .map_err(|e| {
                Error::IoError(io::Error::other(format!("{}: {}", entry.path().display(), e)))
            })?;
        if !includes.is_match(relative_path) {
            continue;
        }
        let Some(relative_path) = relative_path.to_str() else {
            warn!("Skipping {}: file name is not valid UTF-8", entry.path().display());
            continue;
        };
        if excludes.is_match(relative_path) {
            debug!("Skipping {} from exclude patterns", relative_path);
            continue;
        }
        found.push(relative_path.to_string());
    }

    Ok(found)
}
