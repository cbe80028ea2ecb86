//! Terminal syntax highlighting for rendered declarations

use bmi_map_core::Language;
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;

static IDENTIFIER: OnceLock<Regex> = OnceLock::new();

fn identifier() -> &'static Regex {
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)(\s*\()?").expect("identifier pattern is valid")
    })
}

/// Highlights keywords, type names and the declared function name of a
/// single declaration line.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    language: Language,
    keywords: &'static [&'static str],
    types: &'static [&'static str],
}

impl Highlighter {
    pub fn new(language: Language) -> Self {
        let (keywords, types): (&[&str], &[&str]) = match language {
            Language::Sidl => (
                &["in", "inout", "out", "package", "interface", "class"],
                &["int", "double", "string", "array", "void"],
            ),
            Language::C => (&["const"], &["int", "double", "char", "void"]),
            Language::Cxx => (
                &["const", "std"],
                &["int", "double", "char", "void", "string", "vector"],
            ),
            Language::Fortran => (
                &["function", "result"],
                &["integer", "double", "precision", "character"],
            ),
            Language::Python => (
                &["def", "self", "None"],
                &["int", "float", "str", "tuple", "NDArray", "Any"],
            ),
        };

        Self {
            language,
            keywords,
            types,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Wrap recognized tokens of `line` in ANSI styles.
    ///
    /// Text between tokens is copied unchanged, so stripping the escapes
    /// gives back `line`.
    pub fn highlight(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() * 2);
        let mut last = 0;
        let mut named = false;

        for caps in identifier().captures_iter(line) {
            let Some(word) = caps.get(1) else { continue };
            out.push_str(&line[last..word.start()]);
            let text = word.as_str();

            let styled = if self.keywords.contains(&text) {
                text.magenta().bold().to_string()
            } else if self.types.contains(&text) {
                text.cyan().to_string()
            } else if !named && caps.get(2).is_some() {
                named = true;
                text.yellow().bold().to_string()
            } else {
                text.to_string()
            };
            out.push_str(&styled);
            last = word.end();
        }
        out.push_str(&line[last..]);

        out
    }
}
