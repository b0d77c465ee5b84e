//! In-memory code model.
//! Units are accumulated here for a whole run and emitted in one batch.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::HOLDER_NAME;
use crate::error::{Error, Result};
use crate::naming::{to_deferred_identifier, to_identifier, unit_file_path};
use crate::renderer::UnitRenderer;

/// The holder a unit uses at runtime to resolve and format its templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holder {
    /// Identifier of the holder static
    pub name: String,
    /// Bundle name the holder is constructed with
    pub bundle: String,
}

/// Eager and deferred accessors generated for one resource key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorPair {
    pub key: String,
    /// Identifier of the formatted-string accessor
    pub eager: String,
    /// Identifier of the deferred accessor
    pub deferred: String,
    pub arity: usize,
    /// Parameter names, `arg1` through `argN`
    pub params: Vec<String>,
    /// Raw template text, emitted as documentation
    pub template: String,
}

impl AccessorPair {
    pub fn new(key: &str, template: &str, arity: usize) -> Self {
        Self {
            key: key.to_string(),
            eager: to_identifier(key),
            deferred: to_deferred_identifier(key),
            arity,
            params: (1..=arity).map(|i| format!("arg{}", i)).collect(),
            template: template.to_string(),
        }
    }
}

/// One generated compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputUnit {
    /// Fully-qualified unit name, e.g. `org.example.Messages`
    pub name: String,
    /// Relative path of the resource file the unit was generated from
    pub source: String,
    pub holder: Holder,
    pub accessors: Vec<AccessorPair>,
}

impl OutputUnit {
    /// Creates an empty unit with its holder.
    pub fn new(name: &str, source: &str) -> Self {
        Self {
            name: name.to_string(),
            source: source.to_string(),
            holder: Holder {
                name: HOLDER_NAME.to_string(),
                bundle: name.to_string(),
            },
            accessors: Vec::new(),
        }
    }

    pub fn push(&mut self, accessor: AccessorPair) {
        self.accessors.push(accessor);
    }

    /// Output path relative to the output directory.
    pub fn file_path(&self) -> PathBuf {
        unit_file_path(&self.name)
    }
}

/// Units assembled during one run, in the order they were added.
#[derive(Debug, Default)]
pub struct CodeModel {
    units: IndexMap<String, OutputUnit>,
}

impl CodeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fully assembled unit.
    ///
    /// # Errors
    /// * `Error::NameCollision` if a unit with the same name was already added
    pub fn add_unit(&mut self, unit: OutputUnit) -> Result<()> {
        if let Some(existing) = self.units.get(&unit.name) {
            return Err(Error::NameCollision {
                unit: unit.name.clone(),
                first: PathBuf::from(&existing.source),
                second: PathBuf::from(&unit.source),
            });
        }
        self.units.insert(unit.name.clone(), unit);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&OutputUnit> {
        self.units.get(name)
    }

    pub fn units(&self) -> impl Iterator<Item = &OutputUnit> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Writes every unit under `output_dir` and empties the model.
    ///
    /// All units are rendered before the first file is written, so a render
    /// failure leaves the output directory untouched.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Paths of the written files
    ///
    /// # Errors
    /// * `Error::RenderError` if a unit fails to render
    /// * `Error::EmitError` if the output directory or a file cannot be written
    pub fn build<P: AsRef<Path>>(
        &mut self,
        output_dir: P,
        renderer: &dyn UnitRenderer,
    ) -> Result<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).map_err(|source| Error::EmitError {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let rendered = self
            .units
            .values()
            .map(|unit| Ok((output_dir.join(unit.file_path()), renderer.render(unit)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut written = Vec::with_capacity(rendered.len());
        for (path, content) in rendered {
            write_file(&path, &content)?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }

        self.units.clear();
        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let emit_error = |source| Error::EmitError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(emit_error)?;
    }
    fs::write(path, content).map_err(emit_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_pair_names() {
        let pair = AccessorPair::new("greeting.hello", "Hello, {0}!", 1);
        assert_eq!(pair.eager, "greeting_hello");
        assert_eq!(pair.deferred, "_greeting_hello");
        assert_eq!(pair.params, vec!["arg1".to_string()]);
    }

    #[test]
    fn test_add_unit_rejects_collision() {
        let mut model = CodeModel::new();
        model
            .add_unit(OutputUnit::new("a.b", "a/b.properties"))
            .unwrap();

        match model.add_unit(OutputUnit::new("a.b", "a.b.properties")) {
            Err(Error::NameCollision { unit, first, second }) => {
                assert_eq!(unit, "a.b");
                assert_eq!(first, PathBuf::from("a/b.properties"));
                assert_eq!(second, PathBuf::from("a.b.properties"));
            }
            other => panic!("Expected NameCollision, got {:?}", other),
        }
        assert_eq!(model.len(), 1);
    }
}
