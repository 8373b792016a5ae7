//! Command-line interface for tinylang
//! This binary tokenizes and recognizes tinylang programs.
//!
//! Usage:
//!   tinylang process `<path>` [`<format>`]   - Process a file and print the result
//!   tinylang check `<path>`                - Recognize a file; exit status 1 on failure
//!   tinylang demo                        - Run the built-in example programs
//!   tinylang formats                     - List all available formats
//!
//! All commands accept `--config <file>` to layer a TOML configuration over the defaults.

use clap::{Arg, ArgMatches, Command};
use std::path::Path;
use tinylang::config::TinyConfig;
use tinylang::lexer::tokenize;
use tinylang::parser::check;
use tinylang::processor::{
    available_formats, format_summary, process_file, OutputFormat, ProcessingError,
};
use tinylang::samples::DEMO_PROGRAMS;

fn main() {
    let matches = Command::new("tinylang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing and recognizing tinylang programs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Path to a TOML configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("process")
                .about("Process a file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the tinylang file to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format (e.g., token-simple, check-json)")
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Recognize a file and report the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the tinylang file to check")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("demo").about("Run the built-in example programs"))
        .subcommand(Command::new("formats").about("List all available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("process", process_matches)) => handle_process_command(process_matches),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("demo", demo_matches)) => handle_demo_command(demo_matches),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

/// Build the configuration, layering the `--config` file when present
fn load_config(matches: &ArgMatches, format: Option<&str>) -> TinyConfig {
    let config_file = matches.get_one::<String>("config").map(Path::new);
    TinyConfig::load(config_file, format).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// Handle the process command
fn handle_process_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let config = load_config(matches, matches.get_one::<String>("format").map(String::as_str));

    let spec = config.output.spec().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for format in available_formats() {
            eprintln!("  {}", format);
        }
        std::process::exit(1);
    });

    match process_file(path, &spec) {
        Ok(output) => print!("{}", output),
        Err(ProcessingError::Incomplete { output, error }) => {
            print!("{}", output);
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let config = load_config(matches, None);

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    match check(&source) {
        Ok(summary) => {
            if config.check.show_summary {
                // Formatting a summary as simple text cannot fail
                if let Ok(text) = format_summary(&summary, OutputFormat::Simple) {
                    print!("{}", text);
                }
            } else {
                println!("ok");
            }
        }
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Handle the demo command: tokens and recognition for each example program
fn handle_demo_command(matches: &ArgMatches) {
    let config = load_config(matches, None);
    let mut failed = false;

    for (index, program) in DEMO_PROGRAMS.iter().enumerate() {
        let number = index + 1;
        if index > 0 {
            println!();
        }

        if config.demo.show_tokens {
            println!("Tokens for program {}:", number);
            for result in tokenize(program) {
                match result {
                    Ok(token) => println!("{}", token),
                    Err(e) => println!("{}", e),
                }
            }
            println!();
        }

        println!("Recognition for program {}:", number);
        match check(program) {
            Ok(_) => println!("Recognition completed successfully!"),
            Err(e) => {
                println!("{}", e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
