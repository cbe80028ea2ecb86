//! Output formatting and writing utilities
//!
//! Declarations go to standard output either as plain lines (optionally
//! highlighted) or as a JSON array of `{name, declaration}` objects.

mod highlight;

pub use highlight::Highlighter;

use crate::cli::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

/// One rendered function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub declaration: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaration: declaration.into(),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    highlighter: Option<Highlighter>,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on standard output
    pub fn new(format: OutputFormat, highlighter: Option<Highlighter>) -> Self {
        Self::with_writer(format, highlighter, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        highlighter: Option<Highlighter>,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            highlighter,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        Ok(())
    }

    /// Write declarations in the configured format
    pub fn declarations(&mut self, declarations: &[Declaration]) -> Result<()> {
        trace!(
            count = declarations.len(),
            format = ?self.format,
            highlight = ?self.highlighter.map(|h| h.language()),
            "Writing declarations"
        );

        match self.format {
            OutputFormat::Text => {
                for item in declarations {
                    let line = match &self.highlighter {
                        Some(highlighter) => highlighter.highlight(&item.declaration),
                        None => item.declaration.clone(),
                    };
                    self.writeln(&line)?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(declarations)?;
                self.writeln(&json)?;
            }
            OutputFormat::JsonPretty => {
                let json = serde_json::to_string_pretty(declarations)?;
                self.writeln(&json)?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}
