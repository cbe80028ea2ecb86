//! SIDL mapper
//!
//! Every parameter, whatever its intent, appears inline as
//! `name intent type`, and the function always returns an `int` status.

use crate::mapper::{Language, LanguageMapper};
use crate::parameter::{ElementType, ParamType, Parameter};
use crate::Result;

/// Renders `int name(p intent type, ...);`
#[derive(Debug, Clone, Copy, Default)]
pub struct SidlMapper;

impl SidlMapper {
    fn map_type(ty: &ParamType) -> String {
        match ty {
            ParamType::Scalar(scalar) => scalar.to_string(),
            ParamType::Array(array) => {
                let element = match array.element() {
                    ElementType::Any => "",
                    other => other.as_str(),
                };
                if array.rank() > 0 {
                    format!("array<{element}, {}>", array.rank())
                } else {
                    format!("array<{element},>")
                }
            }
        }
    }

    fn map_param(param: &Parameter) -> String {
        format!(
            "{} {} {}",
            param.name(),
            param.intent(),
            Self::map_type(param.param_type())
        )
    }
}

impl LanguageMapper for SidlMapper {
    fn language(&self) -> Language {
        Language::Sidl
    }

    fn render(&self, name: &str, params: &[Parameter]) -> Result<String> {
        let params: Vec<String> = params.iter().map(Self::map_param).collect();
        Ok(format!("int {name}({});", params.join(", ")))
    }
}
