//! bmi-map core - render interface signatures as language declarations
//!
//! This crate turns abstract function signatures (named, typed,
//! intent-annotated parameters) into declaration strings for C, C++,
//! Fortran, Python and SIDL.
//!
//! # Main Components
//!
//! - **Parameter model**: validated names, intents and scalar/array types
//! - **Mapper contract**: the [`LanguageMapper`] trait and [`Language`] registry
//! - **Language mappers**: one zero-sized mapper per target language
//! - **Specification loading**: TOML documents into an ordered [`Spec`]
//! - **BMI catalog**: the Basic Model Interface as constant data
//!
//! # Example
//!
//! ```
//! use bmi_map_core::{render_one, Language, Parameter};
//!
//! # fn example() -> bmi_map_core::Result<()> {
//! let params = vec![
//!     Parameter::new("grid", "in", "int")?,
//!     Parameter::new("rank", "out", "int")?,
//! ];
//!
//! assert_eq!(
//!     render_one("get_grid_rank", &params, Language::C)?,
//!     "int get_grid_rank(void* self, const int grid, int* rank);"
//! );
//! assert_eq!(
//!     render_one("get_grid_rank", &params, Language::Cxx)?,
//!     "int GetGridRank(const int grid);"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod error;
pub mod mapper;
pub mod mappers;
pub mod parameter;
pub mod spec;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use mapper::{mapper_for, render_all, render_one, Language, LanguageMapper};
pub use parameter::{ArrayType, ElementType, Intent, ParamType, Parameter, ScalarType};
pub use spec::{load, load_file, loads, Spec};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
