//! Generation of accessor units from resource files.
//! A [`Generator`] is one run: it filters candidate files, skips units that
//! are up to date, assembles the rest in a [`CodeModel`] and emits them in
//! one batch.

use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    arity::count_args,
    error::{Error, Result},
    format::MessageRenderer,
    model::{AccessorPair, CodeModel, OutputUnit},
    naming::{is_resource_file, is_valid_unit_name, to_unit_name, unit_file_path},
    properties::{load_properties, MessageTable},
    renderer::UnitRenderer,
};

pub struct Generator<'a> {
    /// Substitution engine probed for argument counts
    formatter: &'a dyn MessageRenderer,
    /// Emission backend
    renderer: &'a dyn UnitRenderer,
    output_dir: PathBuf,
    /// Only resource files with exactly this name are processed, when set
    file_mask: Option<String>,
    /// Record per-file failures and continue instead of stopping
    keep_going: bool,
    failures: Vec<Error>,
    model: CodeModel,
    /// Unit names seen this run, including skipped ones, with their source
    claimed: HashMap<String, PathBuf>,
}

impl<'a> Generator<'a> {
    pub fn new<P: AsRef<Path>>(
        formatter: &'a dyn MessageRenderer,
        renderer: &'a dyn UnitRenderer,
        output_dir: P,
    ) -> Self {
        Self {
            formatter,
            renderer,
            output_dir: output_dir.as_ref().to_path_buf(),
            file_mask: None,
            keep_going: false,
            failures: Vec::new(),
            model: CodeModel::new(),
            claimed: HashMap::new(),
        }
    }

    /// Restricts processing to resource files named `file_mask`, e.g. `Messages.properties`.
    pub fn with_file_mask(mut self, file_mask: Option<String>) -> Self {
        self.file_mask = file_mask;
        self
    }

    /// Keeps generating the remaining files when one fails. Failures are
    /// collected in [`Generator::failures`].
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Per-file errors recorded while keeping going.
    pub fn failures(&self) -> &[Error] {
        &self.failures
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Units assembled so far and not yet emitted.
    pub fn model(&self) -> &CodeModel {
        &self.model
    }

    /// Returns true if the candidate is a locale-neutral resource file that
    /// matches the file mask.
    pub fn accepts(&self, relative_path: &str) -> bool {
        let file_name = Path::new(relative_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(relative_path);

        if !is_resource_file(file_name) {
            return false;
        }
        match &self.file_mask {
            Some(mask) => file_name == mask,
            None => true,
        }
    }

    /// Generates units for every accepted candidate under `base_dir`.
    ///
    /// Stops at the first failing file unless keep-going is enabled, in which
    /// case the failure is logged and recorded and the next file is processed.
    /// Units built before a failure stay in the model.
    ///
    /// # Returns
    /// * `Result<usize>` - Number of units generated (up-to-date files excluded)
    pub fn generate<P, I>(&mut self, base_dir: P, candidates: I) -> Result<usize>
    where
        P: AsRef<Path>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut generated = 0;
        for relative_path in candidates {
            let relative_path = relative_path.as_ref();
            if !self.accepts(relative_path) {
                continue;
            }
            let resource_file = base_dir.as_ref().join(relative_path);
            match self.generate_file(&resource_file, relative_path) {
                Ok(true) => generated += 1,
                Ok(false) => {}
                Err(e) if self.keep_going => {
                    warn!("{}", e);
                    self.failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(generated)
    }

    /// Generates the unit for one resource file.
    ///
    /// # Returns
    /// * `Result<bool>` - `false` if the existing output is up to date
    ///
    /// # Errors
    /// * `Error::ResourceError` wrapping the cause, which is one of
    ///   `IoError`, `PropertiesError`, `TemplateSyntaxError`, `InvalidUnitName`
    ///   or `NameCollision`
    pub fn generate_file(&mut self, resource_file: &Path, relative_path: &str) -> Result<bool> {
        self.try_generate_file(resource_file, relative_path)
            .map_err(|e| Error::ResourceError {
                path: resource_file.to_path_buf(),
                source: Box::new(e),
            })
    }

    fn try_generate_file(&mut self, resource_file: &Path, relative_path: &str) -> Result<bool> {
        let unit_name = to_unit_name(relative_path);
        if !is_valid_unit_name(&unit_name) {
            return Err(Error::InvalidUnitName(unit_name));
        }

        if let Some(first) = self.claimed.get(&unit_name) {
            if first == resource_file {
                debug!("{} was already processed", resource_file.display());
                return Ok(false);
            }
            return Err(Error::NameCollision {
                unit: unit_name,
                first: first.clone(),
                second: resource_file.to_path_buf(),
            });
        }
        self.claimed
            .insert(unit_name.clone(), resource_file.to_path_buf());

        let output_file = self.output_dir.join(unit_file_path(&unit_name));
        if is_up_to_date(&output_file, resource_file)? {
            debug!("{} is up to date", output_file.display());
            return Ok(false);
        }

        debug!("Generating {} from {}", unit_name, resource_file.display());
        let table = load_properties(resource_file)?;
        let unit = self.build_unit(&unit_name, relative_path, &table)?;
        self.model.add_unit(unit)?;
        Ok(true)
    }

    fn build_unit(
        &self,
        unit_name: &str,
        relative_path: &str,
        table: &MessageTable,
    ) -> Result<OutputUnit> {
        let mut unit = OutputUnit::new(unit_name, relative_path);
        for (key, template) in table {
            let arity =
                count_args(self.formatter, template).map_err(|source| Error::TemplateSyntaxError {
                    key: key.clone(),
                    template: template.clone(),
                    source,
                })?;
            unit.push(AccessorPair::new(key, template, arity));
        }
        Ok(unit)
    }

    /// Emits every assembled unit to the output directory.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Paths of the written files
    pub fn build(&mut self) -> Result<Vec<PathBuf>> {
        self.model.build(&self.output_dir, self.renderer)
    }
}

/// The output is up to date when it exists and is strictly newer than the
/// resource file.
fn is_up_to_date(output_file: &Path, resource_file: &Path) -> Result<bool> {
    let Ok(output) = fs::metadata(output_file) else {
        return Ok(false);
    };
    let generated = output.modified()?;
    let source = fs::metadata(resource_file)?.modified()?;
    Ok(generated > source)
}
