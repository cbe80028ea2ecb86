//! C mapper
//!
//! Every function takes an opaque `void* self` handle first and returns an
//! `int` status. Outputs travel through one extra level of indirection,
//! except scalar strings: a `char*` is already a pointer the callee writes
//! into, so it stays `const char*` whatever its intent.

use crate::mapper::{Language, LanguageMapper};
use crate::parameter::{Intent, ParamType, Parameter, ScalarType};
use crate::Result;

/// Renders `int name(void* self, ...);`
#[derive(Debug, Clone, Copy, Default)]
pub struct CMapper;

impl CMapper {
    fn map_scalar(scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::Int => "int",
            ScalarType::Double => "double",
            ScalarType::String => "char*",
        }
    }

    /// Undecorated C type; arrays are pointers to their element.
    fn map_type(ty: &ParamType) -> String {
        match ty {
            ParamType::Scalar(scalar) => Self::map_scalar(*scalar).to_string(),
            ParamType::Array(array) => match array.element().scalar() {
                None => "void*".to_string(),
                Some(ScalarType::String) => Self::map_scalar(ScalarType::String).to_string(),
                Some(scalar) => format!("{}*", Self::map_scalar(scalar)),
            },
        }
    }

    fn map_param(param: &Parameter, out: &mut Vec<String>) {
        let ty = param.param_type();
        let mut c_type = Self::map_type(ty);
        if param.intent().is_output() && !ty.is_string() {
            c_type.push('*');
        }
        if param.intent() == Intent::In || ty.is_string() {
            c_type.insert_str(0, "const ");
        }
        out.push(format!("{c_type} {}", param.name()));

        if let Some(array) = ty.as_array() {
            out.extend(array.dims().iter().map(|dim| format!("const int {dim}")));
        }
    }
}

impl LanguageMapper for CMapper {
    fn language(&self) -> Language {
        Language::C
    }

    fn render(&self, name: &str, params: &[Parameter]) -> Result<String> {
        let mut c_params = vec!["void* self".to_string()];
        for param in params {
            Self::map_param(param, &mut c_params);
        }
        Ok(format!("int {name}({});", c_params.join(", ")))
    }
}
