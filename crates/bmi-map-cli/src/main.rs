//! bmi-map CLI - print Basic Model Interface declarations
//!
//! This is the main entry point for the bmi-map command. It reads a BMI
//! specification (or the built-in catalog) and prints one declaration per
//! function in the selected target language.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use config::Config;
use error::Result;
use is_terminal::IsTerminal;
use logging::{timing::Timer, LoggingConfig};
use output::{Highlighter, OutputWriter};
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        let result = handlers::handle_completions(shell, &mut std::io::stdout());
        exit_with(result, false);
    }

    // Configuration feeds both logging and colors, so it loads first
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(Err(e), std::io::stderr().is_terminal()),
    };

    let color_mode = cli.color.or(config.output.color).unwrap_or_default();
    let use_color = color_mode.should_colorize(std::io::stdout().is_terminal());
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = run(&cli, &config, use_color);
    exit_with(result, use_color);
}

/// Report the outcome and terminate with the matching exit code
fn exit_with(result: Result<()>, use_color: bool) -> ! {
    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}", error::format_error(&e, use_color));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip_all, fields(to = ?cli.to, builtin = cli.builtin))]
fn run(cli: &Cli, config: &Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let language = handlers::resolve_language(cli, config)?;
    let format = handlers::resolve_format(cli, config);
    let highlighter = use_color.then(|| Highlighter::new(language));
    let mut output = OutputWriter::new(format, highlighter);

    tracing::info!(
        verbosity = cli.verbosity_level(),
        format = ?output.format(),
        "Executing"
    );

    handlers::handle_map(cli, config, &mut output)
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    logging_config.apply_file_config(&config.logging, verbosity);

    // Environment overrides the file
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
