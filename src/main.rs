use std::process::ExitCode;

use clap::{Arg, Command};

use mmml::encoding::EventToExpression;
use mmml::parsing::ExpressionToEvent;

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt::init();

    let matches = Command::new("mmml")
        .version(VERSION)
        .propagate_version(true)
        .about("The MMML music markup converter.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Decode the given MMML file and print the event tree")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the MMML expression you want to decode."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Decode the given MMML file and re-encode it in explicit form")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the MMML expression you want to re-encode."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                check(filename)
            } else {
                ExitCode::FAILURE
            }
        }
        Some(("format", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                format(filename)
            } else {
                ExitCode::FAILURE
            }
        }
        _ => {
            println!("usage: mmml [COMMAND] ...");
            println!("Try '--help' for more information.");
            ExitCode::FAILURE
        }
    }
}

fn check(filename: &str) -> ExitCode {
    let content = match load(filename) {
        Ok(content) => content,
        Err(code) => return code,
    };

    let mut converter = ExpressionToEvent::new();
    match converter.convert(&content) {
        Ok(event) => {
            println!("{:#?}", event);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {}: {}", filename, error);
            ExitCode::FAILURE
        }
    }
}

fn format(filename: &str) -> ExitCode {
    let content = match load(filename) {
        Ok(content) => content,
        Err(code) => return code,
    };

    let mut decoder = ExpressionToEvent::new();
    let encoder = EventToExpression::new();

    let result = decoder
        .convert(&content)
        .and_then(|event| encoder.convert(&event));
    match result {
        Ok(expression) => {
            println!("{}", expression);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {}: {}", filename, error);
            ExitCode::FAILURE
        }
    }
}

fn load(filename: &str) -> Result<String, ExitCode> {
    std::fs::read_to_string(filename).map_err(|error| {
        eprintln!("error: {}: {}", filename, error);
        ExitCode::FAILURE
    })
}
