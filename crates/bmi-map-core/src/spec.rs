//! Interface specification loading
//!
//! A specification is a TOML document with a `bmi` table. Each key is a
//! function name whose value holds an ordered `params` list:
//!
//! ```toml
//! [bmi.get_value]
//! params = [
//!     { name = "name", intent = "in", type = "string" },
//!     { name = "dest", intent = "in", type = "array[any]" },
//! ]
//! ```
//!
//! Functions keep their document order; [`Spec::sorted`] gives the
//! name-ordered view used for batch rendering.

use crate::parameter::{validate_name, Parameter};
use crate::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawSpec {
    bmi: IndexMap<String, RawFunction>,
}

#[derive(Debug, Deserialize)]
struct RawFunction {
    #[serde(default)]
    params: Vec<RawParameter>,
}

#[derive(Debug, Deserialize)]
struct RawParameter {
    name: String,
    intent: String,
    #[serde(rename = "type")]
    ty: String,
}

/// Ordered mapping from function name to its parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spec {
    functions: IndexMap<String, Vec<Parameter>>,
}

impl Spec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function, validating its name.
    ///
    /// Re-inserting an existing name replaces its parameters and keeps
    /// the original position.
    pub fn insert(&mut self, name: &str, params: Vec<Parameter>) -> Result<()> {
        let name = validate_name(name)?;
        self.functions.insert(name, params);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&[Parameter]> {
        self.functions.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Function names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Functions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Parameter])> {
        self.functions
            .iter()
            .map(|(name, params)| (name.as_str(), params.as_slice()))
    }

    /// Functions ordered by name
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &[Parameter])> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Keep only the functions whose name matches `pattern` anywhere.
    pub fn filter(&self, pattern: &Regex) -> Spec {
        let functions = self
            .functions
            .iter()
            .filter(|(name, _)| pattern.is_match(name))
            .map(|(name, params)| (name.clone(), params.clone()))
            .collect();
        Spec { functions }
    }
}

/// Parse a specification from a TOML string.
pub fn loads(s: &str) -> Result<Spec> {
    let raw: RawSpec = toml::from_str(s)?;

    let mut spec = Spec::new();
    for (name, function) in raw.bmi {
        let params = function
            .params
            .iter()
            .map(|p| Parameter::new(&p.name, &p.intent, &p.ty))
            .collect::<Result<Vec<_>>>()
            .map_err(|err| match err {
                Error::Validation { field, message } => Error::Validation {
                    field,
                    message: format!("{message} in function '{name}'"),
                },
                other => other,
            })?;
        spec.insert(&name, params)?;
    }

    debug!(functions = spec.len(), "Loaded interface specification");
    Ok(spec)
}

/// Parse a specification from a reader.
pub fn load<R: Read>(mut reader: R) -> Result<Spec> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    loads(&content)
}

/// Parse a specification from a file.
pub fn load_file(path: &Path) -> Result<Spec> {
    debug!(path = %path.display(), "Reading interface specification");
    let content = std::fs::read_to_string(path)?;
    loads(&content)
}
