//! Fortran mapper
//!
//! Only the function header is rendered; type declarations belong in the
//! body, which is out of reach here.

use crate::mapper::{Language, LanguageMapper};
use crate::parameter::Parameter;
use crate::Result;

/// Renders `function name(this, ...) result(bmi_status)`
#[derive(Debug, Clone, Copy, Default)]
pub struct FortranMapper;

impl LanguageMapper for FortranMapper {
    fn language(&self) -> Language {
        Language::Fortran
    }

    fn render(&self, name: &str, params: &[Parameter]) -> Result<String> {
        let args: Vec<&str> = std::iter::once("this")
            .chain(params.iter().map(Parameter::name))
            .collect();
        Ok(format!(
            "function {name}({}) result(bmi_status)",
            args.join(", ")
        ))
    }
}
