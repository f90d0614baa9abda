//! Command-line interface for clean
//! This binary converts CLEAN files to Akoma Ntoso and exposes the intermediate
//! pipeline stages for inspection.
//!
//! Usage:
//!   clean convert `<path>` [--format `<format>`] [--config `<file>`] [--output `<file>`]
//!   clean formats                                        - List all available formats

use clap::{Arg, Command};
use clean::clean::config::{CleanConfig, LogLevel, Loader};
use clean::clean::processor::{available_formats, process_file, ProcessingSpec};
use std::fs;

fn main() {
    let matches = Command::new("clean")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert CLEAN legislation to Akoma Ntoso XML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a CLEAN file, or print one of its pipeline stages")
                .arg(
                    Arg::new("path")
                        .help("Path to the CLEAN file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'akn-xml', 'ast-treeviz'); defaults to the configured format"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the result to this file instead of stdout"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let Some(path) = convert_matches.get_one::<String>("path") else {
                fail("missing input path");
            };
            let config = load_config(
                convert_matches.get_one::<String>("config"),
                convert_matches.get_one::<String>("format"),
            );
            init_logging(config.logging.level);
            handle_convert_command(path, &config, convert_matches.get_one::<String>("output"));
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        _ => fail("unknown command"),
    }
}

/// Print an error and exit with status 1
fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(config_path: Option<&String>, format: Option<&String>) -> CleanConfig {
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader
            .set_override("convert.format", format.as_str())
            .unwrap_or_else(|e| fail(&format!("invalid format override: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(&format!("failed to load configuration: {}", e)))
}

/// Install a stderr subscriber filtered to this crate's events
fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("clean", tracing::Level::from(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Handle the convert command
fn handle_convert_command(path: &str, config: &CleanConfig, output: Option<&String>) {
    let spec = ProcessingSpec::from_string(&config.convert.format)
        .unwrap_or_else(|e| fail(&e.to_string()))
        .with_pretty_json(config.inspect.pretty_json);

    let result = process_file(path, &spec).unwrap_or_else(|e| fail(&e.to_string()));

    match output {
        Some(output_path) => {
            fs::write(output_path, result).unwrap_or_else(|e| {
                fail(&format!("failed to write {}: {}", output_path, e))
            });
        }
        None => print!("{}", result),
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
