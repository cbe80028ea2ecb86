//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use bmi_map_core::Language;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// bmi-map - print Basic Model Interface declarations for other languages
///
/// Reads a BMI specification (TOML) and prints one declaration per function
/// for the selected language, sorted by function name.
#[derive(Parser, Debug)]
#[command(name = "bmi-map", version, author, about, long_about = None)]
pub struct Cli {
    /// Language for which to generate mappings [default: sidl]
    #[arg(long, value_enum)]
    pub to: Option<TargetLanguage>,

    /// Only map functions whose name matches this regular expression [default: .*]
    #[arg(long, value_name = "REGEX")]
    pub include: Option<String>,

    /// When to use syntax highlighting [default: auto]
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Spec file from which to read function specifications ('-' for stdin)
    #[arg(long, value_name = "SPEC", conflicts_with = "builtin")]
    pub spec: Option<PathBuf>,

    /// Map the built-in BMI function catalog instead of reading a spec
    #[arg(long)]
    pub builtin: bool,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "BMI_MAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print shell completions for the given shell and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Target languages accepted by `--to`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TargetLanguage {
    /// Scientific Interface Definition Language
    Sidl,
    /// C
    C,
    /// C++
    #[value(name = "c++")]
    Cxx,
    /// Fortran
    Fortran,
    /// Python
    Python,
}

/// When to colorize output
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Always highlight
    Always,
    /// Highlight when standard output is a terminal
    #[default]
    Auto,
    /// Never highlight
    Never,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One declaration per line
    #[default]
    Text,
    /// JSON array of {name, declaration}
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

impl ColorMode {
    /// Resolve the mode against whether stdout is a terminal
    pub fn should_colorize(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        }
    }
}

impl From<TargetLanguage> for Language {
    fn from(target: TargetLanguage) -> Self {
        match target {
            TargetLanguage::Sidl => Language::Sidl,
            TargetLanguage::C => Language::C,
            TargetLanguage::Cxx => Language::Cxx,
            TargetLanguage::Fortran => Language::Fortran,
            TargetLanguage::Python => Language::Python,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
