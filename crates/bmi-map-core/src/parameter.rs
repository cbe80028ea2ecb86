//! Parameter model for interface functions
//!
//! A [`Parameter`] is one formal argument of an interface function: a
//! validated identifier, an [`Intent`] and a [`ParamType`]. Parameters are
//! validated once, at construction, and are immutable afterwards.
//!
//! Array types are written `array[elem, dim, ...]`. The element type comes
//! first and is followed by zero or more dimension names:
//!
//! ```
//! use bmi_map_core::parameter::{split_array_type, Parameter};
//!
//! let param = Parameter::new("inds", "in", "array[int,count]")?;
//! assert_eq!(param.type_string(), "array[int, count]");
//!
//! let (element, dims) = split_array_type("array[double, m, n]")?;
//! assert_eq!(element, "double");
//! assert_eq!(dims, vec!["m".to_string(), "n".to_string()]);
//! # Ok::<(), bmi_map_core::Error>(())
//! ```

use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static ARRAY_TYPE_REGEX: OnceLock<Regex> = OnceLock::new();

fn array_type_regex() -> &'static Regex {
    ARRAY_TYPE_REGEX.get_or_init(|| {
        Regex::new(r"^array\[(.*?)\]$").expect("array type pattern is a valid regex")
    })
}

/// Direction of data flow for a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The caller supplies the value
    In,
    /// The caller supplies the value and receives it back
    InOut,
    /// Only the callee supplies the value
    Out,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::In, Intent::InOut, Intent::Out];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::In => "in",
            Intent::InOut => "inout",
            Intent::Out => "out",
        }
    }

    /// True for `in` and `inout`: the caller passes a value in.
    pub fn is_input(&self) -> bool {
        matches!(self, Intent::In | Intent::InOut)
    }

    /// True for `inout` and `out`: a value comes back to the caller.
    pub fn is_output(&self) -> bool {
        matches!(self, Intent::InOut | Intent::Out)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "in" => Ok(Intent::In),
            "inout" => Ok(Intent::InOut),
            "out" => Ok(Intent::Out),
            other => Err(Error::validation(
                "intent",
                format!("intent not understood ({other} not one of 'in', 'inout', 'out')"),
            )),
        }
    }
}

/// Scalar parameter types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Double,
    String,
}

impl ScalarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Double => "double",
            ScalarType::String => "string",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int" => Ok(ScalarType::Int),
            "double" => Ok(ScalarType::Double),
            "string" => Ok(ScalarType::String),
            other => Err(Error::validation(
                "type",
                format!("type not understood ('{other}' not one of 'double', 'int', 'string')"),
            )),
        }
    }
}

/// Element types allowed inside `array[...]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Any,
    Int,
    Double,
    String,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Any => "any",
            ElementType::Int => "int",
            ElementType::Double => "double",
            ElementType::String => "string",
        }
    }

    /// The scalar this element corresponds to, `None` for `any`.
    pub fn scalar(&self) -> Option<ScalarType> {
        match self {
            ElementType::Any => None,
            ElementType::Int => Some(ScalarType::Int),
            ElementType::Double => Some(ScalarType::Double),
            ElementType::String => Some(ScalarType::String),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "any" => Ok(ElementType::Any),
            "int" => Ok(ElementType::Int),
            "double" => Ok(ElementType::Double),
            "string" => Ok(ElementType::String),
            other => Err(Error::validation(
                "type",
                format!(
                    "array type not understood ({other} not one of 'any', 'double', 'int', 'string')"
                ),
            )),
        }
    }
}

/// An array type: element type plus ordered, distinct dimension names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    element: ElementType,
    dims: Vec<String>,
}

impl ArrayType {
    /// Build an array type, rejecting invalid or repeated dimension names.
    pub fn new(element: ElementType, dims: Vec<String>) -> Result<Self> {
        if let Some(bad) = dims.iter().find(|dim| !is_identifier(dim)) {
            return Err(Error::validation(
                "type",
                format!("dimension name is not valid ({bad})"),
            ));
        }

        let mut repeated: Vec<&str> = Vec::new();
        for (i, dim) in dims.iter().enumerate() {
            if dims[..i].contains(dim) && !repeated.contains(&dim.as_str()) {
                repeated.push(dim);
            }
        }
        if !repeated.is_empty() {
            return Err(Error::validation(
                "type",
                format!(
                    "repeated dimension{} ({})",
                    if repeated.len() > 1 { "s" } else { "" },
                    repeated.join(", ")
                ),
            ));
        }

        Ok(Self { element, dims })
    }

    pub fn element(&self) -> ElementType {
        self.element
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Number of named dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array[{}", self.element)?;
        for dim in &self.dims {
            write!(f, ", {dim}")?;
        }
        f.write_str("]")
    }
}

impl FromStr for ArrayType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (element, dims) = split_array_type(s)?;
        ArrayType::new(element.parse()?, dims)
    }
}

/// A parameter type, either scalar or array
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    Scalar(ScalarType),
    Array(ArrayType),
}

impl ParamType {
    pub fn is_scalar(&self) -> bool {
        matches!(self, ParamType::Scalar(_))
    }

    /// True only for the scalar `string` type, never for `array[string]`.
    pub fn is_string(&self) -> bool {
        matches!(self, ParamType::Scalar(ScalarType::String))
    }

    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            ParamType::Array(array) => Some(array),
            ParamType::Scalar(_) => None,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Scalar(scalar) => scalar.fmt(f),
            ParamType::Array(array) => array.fmt(f),
        }
    }
}

impl FromStr for ParamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with("array") {
            s.parse().map(ParamType::Array)
        } else {
            s.parse().map(ParamType::Scalar)
        }
    }
}

/// One formal argument of an interface function
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    intent: Intent,
    ty: ParamType,
}

impl Parameter {
    /// Validate and normalize a parameter from its raw strings.
    pub fn new(name: &str, intent: &str, ty: &str) -> Result<Self> {
        Ok(Self {
            name: validate_name(name)?,
            intent: intent.parse()?,
            ty: ty.parse()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn param_type(&self) -> &ParamType {
        &self.ty
    }

    /// The normalized type string, e.g. `array[int, count]`.
    pub fn type_string(&self) -> String {
        self.ty.to_string()
    }

    pub fn is_scalar(&self) -> bool {
        self.ty.is_scalar()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.intent, self.ty)
    }
}

/// Strip whitespace from a name and check that it is an identifier.
pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if !is_identifier(name) {
        return Err(Error::validation(
            "name",
            format!("name is not valid ({name})"),
        ));
    }
    Ok(name.to_string())
}

/// Non-empty, starts with a letter or underscore, continues with
/// letters, digits or underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Split an `array[...]` type into its element type and dimension names.
///
/// Whitespace around every comma-separated part is stripped. The element
/// type is returned as written; it is not checked against the valid
/// element types.
pub fn split_array_type(array_type: &str) -> Result<(String, Vec<String>)> {
    let captures = array_type_regex().captures(array_type).ok_or_else(|| {
        Error::validation("type", format!("type not understood ({array_type})"))
    })?;

    let mut parts = captures[1].split(',').map(|part| part.trim().to_string());
    let element = parts.next().unwrap_or_default();
    Ok((element, parts.collect()))
}
