//! Shared utilities for command handlers
//!
//! Each setting resolves in the same order: command-line flag, then
//! configuration file, then the built-in default.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use bmi_map_core::{catalog, Language, Spec};
use regex::Regex;
use std::io;
use std::path::{Path, PathBuf};

/// Function filter used when neither flag nor config names one
pub const DEFAULT_INCLUDE: &str = ".*";

/// Resolve the target language
pub fn resolve_language(cli: &Cli, config: &Config) -> Result<Language> {
    if let Some(target) = cli.to {
        return Ok(target.into());
    }
    Ok(config.language()?.unwrap_or_default())
}

/// Resolve and compile the function name filter
pub fn resolve_include(cli: &Cli, config: &Config) -> Result<Regex> {
    let pattern = cli
        .include
        .as_deref()
        .or(config.include.as_deref())
        .unwrap_or(DEFAULT_INCLUDE);

    Regex::new(pattern)
        .map_err(|e| Error::invalid_args(format!("invalid --include pattern '{pattern}': {e}")))
}

/// Resolve the output format
pub fn resolve_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.format.or(config.output.format).unwrap_or_default()
}

/// Where function specifications come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    /// The built-in BMI catalog
    Builtin,
    /// Standard input
    Stdin,
    /// A TOML file
    File(PathBuf),
}

impl SpecSource {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.builtin {
            return SpecSource::Builtin;
        }
        match cli.spec.as_deref() {
            Some(path) if path == Path::new("-") => SpecSource::Stdin,
            Some(path) => SpecSource::File(path.to_path_buf()),
            None => SpecSource::Stdin,
        }
    }

    /// Read and validate the specification
    pub fn load(&self) -> Result<Spec> {
        let spec = match self {
            SpecSource::Builtin => catalog::bmi()?,
            SpecSource::Stdin => bmi_map_core::load(io::stdin().lock())?,
            SpecSource::File(path) => {
                if !path.exists() {
                    return Err(Error::FileNotFound { path: path.clone() });
                }
                bmi_map_core::load_file(path)?
            }
        };
        Ok(spec)
    }
}
