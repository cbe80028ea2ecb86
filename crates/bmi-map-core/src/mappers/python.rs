//! Python stub mapper
//!
//! Inputs become annotated arguments after `self`; outputs (including
//! `inout`) become the return annotation, as a tuple when there are several.

use crate::mapper::{Language, LanguageMapper};
use crate::parameter::{ElementType, ParamType, Parameter, ScalarType};
use crate::Result;

/// Renders `def name(self, ...) -> T:`
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonMapper;

impl PythonMapper {
    fn map_scalar(scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::Int => "int",
            ScalarType::Double => "float",
            ScalarType::String => "str",
        }
    }

    fn map_type(ty: &ParamType) -> String {
        match ty {
            ParamType::Scalar(scalar) => Self::map_scalar(*scalar).to_string(),
            ParamType::Array(array) => match array.element() {
                ElementType::Any => "NDArray[Any]".to_string(),
                ElementType::String => "tuple[str, ...]".to_string(),
                ElementType::Int => format!("NDArray[{}]", Self::map_scalar(ScalarType::Int)),
                ElementType::Double => {
                    format!("NDArray[{}]", Self::map_scalar(ScalarType::Double))
                }
            },
        }
    }

    fn map_returns(params: &[Parameter]) -> String {
        let returns: Vec<String> = params
            .iter()
            .filter(|param| param.intent().is_output())
            .map(|param| Self::map_type(param.param_type()))
            .collect();

        match returns.as_slice() {
            [] => "None".to_string(),
            [single] => single.clone(),
            many => format!("tuple[{}]", many.join(", ")),
        }
    }
}

impl LanguageMapper for PythonMapper {
    fn language(&self) -> Language {
        Language::Python
    }

    fn render(&self, name: &str, params: &[Parameter]) -> Result<String> {
        let args: Vec<String> = std::iter::once("self".to_string())
            .chain(
                params
                    .iter()
                    .filter(|param| param.intent().is_input())
                    .map(|param| format!("{}: {}", param.name(), Self::map_type(param.param_type()))),
            )
            .collect();
        Ok(format!(
            "def {name}({}) -> {}:",
            args.join(", "),
            Self::map_returns(params)
        ))
    }
}
