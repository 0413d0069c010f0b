//! Stacklex CLI - Command line interface
//!
//! Reads an assembly source file, tokenizes it, and prints the tokens.

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use crate::platform::print_error_with_source;
use stacklex_api::{load_config, read_source, tokenize, RunConfig, TokenizeOutput};
use stacklex_config::{LogLevel, OutputFormat, StacklexConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "stacklex",
    about = "Stacklex - state-stack rule scanner for a small assembly dialect",
    version
)]
struct Cli {
    /// Source file to tokenize
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// JSON configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log level for the scanner phase only
    #[arg(long, value_parser = parse_log_level)]
    scanner_log_level: Option<LogLevel>,

    /// Log level for the api phase only
    #[arg(long, value_parser = parse_log_level)]
    api_log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,

    /// Fail if the input ends inside a string or other nested state
    #[arg(long)]
    strict: bool,

    /// Print the source with line numbers before the tokens
    #[arg(long)]
    show_source: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => StacklexConfig::default(),
    };

    logging::init(&build_log_config(&cli, &file_config), cli.log_format);

    let run_config = build_run_config(&cli, &file_config);
    let format = cli.format.map(OutputFormat::from).unwrap_or(file_config.format);
    debug!(target: "stacklex::cli", file = %cli.file.display(), ?format, "Starting");

    let source = match read_source(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if run_config.show_source {
        println!("[Source]");
        for (i, line) in source.lines().enumerate() {
            println!("{:3} | {}", i + 1, line);
        }
        println!("[Tokens]");
    }

    match tokenize(&source, &run_config) {
        Ok(output) => {
            if let Err(e) = print_tokens(&output, format) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            print_error_with_source(&e, &source);
            process::exit(1);
        }
    }
}

/// Flag levels win over the configuration file, per phase.
fn build_log_config(cli: &Cli, file_config: &StacklexConfig) -> LogConfig {
    let global = cli
        .log_level
        .or(file_config.log_level)
        .unwrap_or_default();
    LogConfig::new(global).with_overrides(
        cli.scanner_log_level.or(file_config.scanner_log_level),
        cli.api_log_level.or(file_config.api_log_level),
    )
}

/// Command-line flags override the configuration file
fn build_run_config(cli: &Cli, file_config: &StacklexConfig) -> RunConfig {
    let mut run_config = RunConfig::from_config(file_config);
    if cli.strict {
        run_config = run_config.strict();
    }
    if cli.show_source {
        run_config.show_source = true;
    }
    run_config
}

fn print_tokens(output: &TokenizeOutput, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Text => {
            for token in &output.tokens {
                println!("{}", token.kind);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output.reports())?);
        }
    }
    Ok(())
}

/// Parse log level string
fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s))
}
