//! C++ mapper
//!
//! Function names become PascalCase methods. A single `out` parameter is
//! turned into the return value; C++ has no way to return more than one, so
//! such signatures are rejected rather than guessed at.

use crate::mapper::{Language, LanguageMapper};
use crate::parameter::{ElementType, Intent, ParamType, Parameter, ScalarType};
use crate::{Error, Result};

/// Renders `<return> PascalName(...);`
#[derive(Debug, Clone, Copy, Default)]
pub struct CxxMapper;

impl CxxMapper {
    /// `get_component_name` -> `GetComponentName`
    pub fn method_name(name: &str) -> String {
        name.split('_')
            .map(|segment| {
                let mut chars = segment.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect()
    }

    fn map_scalar(scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::Int => "int",
            ScalarType::Double => "double",
            ScalarType::String => "std::string",
        }
    }

    fn map_type(ty: &ParamType) -> String {
        match ty {
            ParamType::Scalar(scalar) => Self::map_scalar(*scalar).to_string(),
            ParamType::Array(array) => {
                let element = match array.element() {
                    ElementType::Any => "void",
                    ElementType::String => "std::vector<std::string>",
                    ElementType::Int => Self::map_scalar(ScalarType::Int),
                    ElementType::Double => Self::map_scalar(ScalarType::Double),
                };
                format!("{element}*")
            }
        }
    }

    fn map_param(param: &Parameter) -> String {
        let ty = param.param_type();
        let mut cxx_type = Self::map_type(ty);
        if !ty.is_string() {
            if param.intent() == Intent::In {
                cxx_type.insert_str(0, "const ");
            } else if param.intent().is_output() {
                cxx_type.push('*');
            }
        }
        format!("{cxx_type} {}", param.name())
    }

    fn map_returns(name: &str, params: &[Parameter]) -> Result<String> {
        let returns: Vec<&Parameter> = params
            .iter()
            .filter(|param| param.intent() == Intent::Out)
            .collect();

        match returns.as_slice() {
            [] => Ok("void".to_string()),
            [single] => Ok(Self::map_type(single.param_type())),
            many => Err(Error::UnsupportedSignature {
                function: name.to_string(),
                message: format!(
                    "multiple return types not allowed ({} out parameters: {})",
                    many.len(),
                    many.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
                ),
            }),
        }
    }
}

impl LanguageMapper for CxxMapper {
    fn language(&self) -> Language {
        Language::Cxx
    }

    fn render(&self, name: &str, params: &[Parameter]) -> Result<String> {
        let returns = Self::map_returns(name, params)?;
        let args: Vec<String> = params
            .iter()
            .filter(|param| param.intent().is_input())
            .map(Self::map_param)
            .collect();
        Ok(format!(
            "{returns} {}({});",
            Self::method_name(name),
            args.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::test_helpers::params;
    use pretty_assertions::assert_eq;

    fn render(name: &str, raw: &[(&str, &str, &str)]) -> Result<String> {
        CxxMapper.render(name, &params(raw))
    }

    #[test]
    fn test_method_name() {
        assert_eq!(CxxMapper::method_name("foo"), "Foo");
        assert_eq!(CxxMapper::method_name("get_component_name"), "GetComponentName");
        assert_eq!(CxxMapper::method_name("get_grid_x"), "GetGridX");
        assert_eq!(CxxMapper::method_name("_private"), "Private");
    }

    #[test]
    fn test_cxx_one_parameter() {
        let cases = [
            ("in", "void Foo(const int a);"),
            ("inout", "void Foo(int* a);"),
            ("out", "int Foo();"),
        ];
        for (intent, expected) in cases {
            assert_eq!(render("foo", &[("a", intent, "int")]).unwrap(), expected);
        }
    }

    #[test]
    fn test_cxx_two_parameters() {
        let cases = [
            ("in", "in", "void Foo(const int a, const int b);"),
            ("in", "inout", "void Foo(const int a, int* b);"),
            ("in", "out", "int Foo(const int a);"),
            ("inout", "in", "void Foo(int* a, const int b);"),
            ("out", "in", "int Foo(const int b);"),
        ];
        for (a_intent, b_intent, expected) in cases {
            assert_eq!(
                render("foo", &[("a", a_intent, "int"), ("b", b_intent, "int")]).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_cxx_multiple_outs_are_rejected() {
        let err = render("foo", &[("a", "out", "int"), ("b", "out", "double")]).unwrap_err();
        match err {
            Error::UnsupportedSignature { function, message } => {
                assert_eq!(function, "foo");
                assert!(message.contains("a, b"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cxx_inout_does_not_count_as_return() {
        assert_eq!(
            render("foo", &[("a", "inout", "int"), ("b", "out", "double")]).unwrap(),
            "double Foo(int* a);"
        );
    }

    #[test]
    fn test_cxx_strings_are_not_decorated() {
        assert_eq!(
            render("get_var_units", &[("name", "in", "string"), ("units", "out", "string")])
                .unwrap(),
            "std::string GetVarUnits(std::string name);"
        );
        assert_eq!(
            render("foo", &[("s", "inout", "string")]).unwrap(),
            "void Foo(std::string s);"
        );
    }

    #[test]
    fn test_cxx_arrays() {
        assert_eq!(
            render("get_grid_x", &[("grid", "in", "int"), ("x", "in", "array[double]")])
                .unwrap(),
            "void GetGridX(const int grid, const double* x);"
        );
        assert_eq!(
            render("get_value_ptr", &[("name", "in", "string"), ("dest_ptr", "out", "array[any]")])
                .unwrap(),
            "void* GetValuePtr(std::string name);"
        );
        assert_eq!(
            render("get_input_var_names", &[("names", "out", "array[string]")]).unwrap(),
            "std::vector<std::string>* GetInputVarNames();"
        );
        assert_eq!(
            render("foo", &[("names", "in", "array[string, n]")]).unwrap(),
            "void Foo(const std::vector<std::string>* names);"
        );
    }
}
