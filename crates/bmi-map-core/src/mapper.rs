//! Language mapper contract and registry
//!
//! Every target language implements [`LanguageMapper`]. Mappers are
//! zero-sized and hold nothing but their static type tables, so the
//! registry hands out `&'static` references.

use crate::mappers::{CMapper, CxxMapper, FortranMapper, PythonMapper, SidlMapper};
use crate::parameter::{validate_name, Parameter};
use crate::spec::Spec;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Renders one function signature as a declaration in a target language
pub trait LanguageMapper: Send + Sync {
    /// The language this mapper renders
    fn language(&self) -> Language;

    /// Render a single-line declaration for `name` with `params` in order.
    ///
    /// `name` is expected to be a validated identifier. Use [`render_one`]
    /// to validate it first.
    fn render(&self, name: &str, params: &[Parameter]) -> Result<String>;
}

/// Target languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// Scientific Interface Definition Language
    #[default]
    Sidl,
    C,
    Cxx,
    Fortran,
    Python,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Sidl,
        Language::C,
        Language::Cxx,
        Language::Fortran,
        Language::Python,
    ];

    /// The selector used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Sidl => "sidl",
            Language::C => "c",
            Language::Cxx => "c++",
            Language::Fortran => "fortran",
            Language::Python => "python",
        }
    }

    /// The mapper for this language
    pub fn mapper(&self) -> &'static dyn LanguageMapper {
        match self {
            Language::Sidl => &SidlMapper,
            Language::C => &CMapper,
            Language::Cxx => &CxxMapper,
            Language::Fortran => &FortranMapper,
            Language::Python => &PythonMapper,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| {
                let choices: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
                Error::configuration(format!(
                    "unknown language '{s}' (expected one of {})",
                    choices.join(", ")
                ))
            })
    }
}

/// Look up a mapper by its selector string.
pub fn mapper_for(selector: &str) -> Result<&'static dyn LanguageMapper> {
    selector.parse::<Language>().map(|language| language.mapper())
}

/// Render one function after validating its name.
pub fn render_one(name: &str, params: &[Parameter], language: Language) -> Result<String> {
    let name = validate_name(name)?;
    let declaration = language.mapper().render(&name, params)?;
    trace!(function = %name, %language, %declaration, "Rendered function");
    Ok(declaration)
}

/// Render every function in `spec`, ordered by function name.
///
/// Stops at the first function that fails to render.
pub fn render_all(spec: &Spec, language: Language) -> Result<Vec<String>> {
    debug!(functions = spec.len(), %language, "Rendering specification");
    spec.sorted()
        .map(|(name, params)| render_one(name, params, language))
        .collect()
}
