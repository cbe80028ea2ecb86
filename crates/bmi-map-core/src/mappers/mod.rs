//! Per-language mappers
//!
//! Each mapper turns a function name and its ordered parameters into one
//! declaration line. Type tables are plain `match` expressions.

mod c;
mod cxx;
mod fortran;
mod python;
mod sidl;

pub use c::CMapper;
pub use cxx::CxxMapper;
pub use fortran::FortranMapper;
pub use python::PythonMapper;
pub use sidl::SidlMapper;

#[cfg(test)]
pub(crate) mod test_helpers {
    use crate::parameter::Parameter;

    /// Build parameters from `(name, intent, type)` triples.
    pub fn params(raw: &[(&str, &str, &str)]) -> Vec<Parameter> {
        raw.iter()
            .map(|(name, intent, ty)| Parameter::new(name, intent, ty).unwrap())
            .collect()
    }
}
