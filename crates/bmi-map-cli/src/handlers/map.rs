//! Map command handler

use super::utils::{resolve_include, resolve_language, SpecSource};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{Declaration, OutputWriter};
use bmi_map_core::{render_all, Language, Spec};
use tracing::{debug, info};

/// Render every function of `spec` in `language`, sorted by name.
///
/// Any function that cannot be rendered aborts the whole batch.
pub fn map_declarations(spec: &Spec, language: Language) -> Result<Vec<Declaration>> {
    let timer = Timer::with_details("render", language.as_str());
    let _entered = timer.span().clone().entered();

    let rendered = render_all(spec, language)?;
    let declarations = spec
        .sorted()
        .zip(rendered)
        .map(|((name, _), declaration)| Declaration::new(name, declaration))
        .collect::<Vec<_>>();

    debug!(
        count = declarations.len(),
        elapsed_us = timer.elapsed().as_micros() as u64,
        "Rendered declarations"
    );
    Ok(declarations)
}

/// Handle a mapping run
pub fn handle_map(cli: &Cli, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let language = resolve_language(cli, config)?;
    let include = resolve_include(cli, config)?;
    let source = SpecSource::from_cli(cli);

    info!(%language, include = include.as_str(), source = ?source, "Mapping functions");

    let spec = {
        let _timer = Timer::new("load_spec");
        source.load()?
    };
    let selected = spec.filter(&include);
    debug!(
        total = spec.len(),
        selected = selected.len(),
        "Filtered functions"
    );

    let declarations = map_declarations(&selected, language)?;
    output.declarations(&declarations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use bmi_map_core::catalog;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn run(args: &[&str], config: &Config) -> Result<String> {
        let cli = Cli::parse_from(std::iter::once("bmi-map").chain(args.iter().copied()));
        let captured = Captured::default();
        let mut output =
            OutputWriter::with_writer(OutputFormat::Text, None, Box::new(captured.clone()));
        handle_map(&cli, config, &mut output)?;
        let bytes = captured.0.lock().unwrap().clone();
        Ok(String::from_utf8(bytes).unwrap())
    }

    fn write_spec(content: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bmi.toml");
        std::fs::write(&path, content).unwrap();
        let path = path.to_string_lossy().into_owned();
        (dir, path)
    }

    #[test]
    fn test_map_declarations_sorted_with_names() {
        let spec = catalog::bmi().unwrap();
        let declarations = map_declarations(&spec, Language::Python).unwrap();

        assert_eq!(declarations.len(), 42);
        assert_eq!(declarations[0].name, "finalize");
        assert_eq!(declarations[0].declaration, "def finalize(self) -> None:");
        assert_eq!(declarations[41].name, "update_until");
    }

    #[test]
    fn test_builtin_with_include() {
        let out = run(
            &["--builtin", "--to", "c", "--include", "^get_grid_r"],
            &Config::default(),
        )
        .unwrap();

        assert_eq!(
            out,
            "int get_grid_rank(void* self, const int grid, int* rank);\n"
        );
    }

    #[test]
    fn test_include_from_config() {
        let config = Config {
            language: Some("c++".to_string()),
            include: Some("time".to_string()),
            ..Default::default()
        };
        let out = run(&["--builtin"], &config).unwrap();

        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![
                "double GetCurrentTime();",
                "double GetEndTime();",
                "double GetStartTime();",
                "double GetTimeStep();",
                "std::string GetTimeUnits();",
            ]
        );
    }

    #[test]
    fn test_spec_file_sorted_output() {
        let (_dir, path) = write_spec(
            r#"
[bmi.update]

[bmi.get_grid_rank]
params = [
    { name = "grid", intent = "in", type = "int" },
    { name = "rank", intent = "out", type = "int" },
]
"#,
        );
        let out = run(&["--spec", &path], &Config::default()).unwrap();

        assert_eq!(
            out,
            "int get_grid_rank(grid in int, rank out int);\nint update();\n"
        );
    }

    #[test]
    fn test_unsupported_signature_aborts_batch() {
        let (_dir, path) = write_spec(
            r#"
[bmi.aaa]

[bmi.two_outs]
params = [
    { name = "a", intent = "out", type = "int" },
    { name = "b", intent = "out", type = "int" },
]
"#,
        );
        let err = run(&["--spec", &path, "--to", "c++"], &Config::default()).unwrap_err();

        assert_eq!(err.exit_code(), 3);

        // Other languages accept the same signature
        assert!(run(&["--spec", &path, "--to", "c"], &Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_spec_reports_validation_error() {
        let (_dir, path) = write_spec(
            r#"
[bmi.foo]
params = [{ name = "a", intent = "sideways", type = "int" }]
"#,
        );
        let err = run(&["--spec", &path], &Config::default()).unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("in function 'foo'"));
    }

    #[test]
    fn test_no_matches_prints_nothing() {
        let out = run(&["--builtin", "--include", "^nothing$"], &Config::default()).unwrap();
        assert_eq!(out, "");
    }
}
