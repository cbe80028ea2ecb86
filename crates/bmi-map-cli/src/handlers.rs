//! Command handlers
//!
//! This module contains the implementation logic behind the command line:
//! mapping a specification to declarations and printing shell completions.

mod completions;
mod map;
mod utils;

pub use completions::handle_completions;
pub use map::handle_map;
pub use utils::{resolve_format, resolve_language};
