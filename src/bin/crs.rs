//! Command-line interface for crs
//! Parses, normalizes, validates and converts canonical realm strings.
//!
//! Usage:
//!   crs parse `<text>` [--format `<format>`] [--strict]  - Print the graph a realm string describes
//!   crs generate `<file>`                              - Canonical string for a graph JSON file ("-" for stdin)
//!   crs normalize `<text>` [--strict]                  - Rewrite a realm string in canonical form
//!   crs validate `<text>`                              - Report every problem in a realm string
//!   crs convert `<model>` [--format `<format>`]        - Realm graph of a model description JSON file
//!   crs list-formats                                 - List the available output formats
//!   crs list-realms                                  - List the known realm names, codes and colours
//!
//! Global options: `--config <file>` layers a TOML file over the defaults, `-v` raises
//! log output (repeat for more).

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use crs::crs::config::{CrsConfig, Loader};
use crs::crs::formats::{FormatRegistry, TreevizFormatter};
use crs::crs::model::ModelDescription;
use crs::crs::vocab::Vocabulary;
use crs::{parse, parse_strict, RealmGraph};
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("crs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and generating canonical realm strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v debug, -vv trace)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a realm string and print the graph")
                .arg(text_arg())
                .arg(format_arg())
                .arg(strict_arg()),
        )
        .subcommand(
            Command::new("generate")
                .about("Print the canonical string for a graph in JSON")
                .arg(
                    Arg::new("path")
                        .help("Graph JSON file, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Rewrite a realm string in canonical form")
                .arg(text_arg())
                .arg(strict_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a realm string, reporting every problem")
                .arg(text_arg()),
        )
        .subcommand(
            Command::new("convert")
                .about("Build the realm graph of a model description")
                .arg(
                    Arg::new("path")
                        .help("Model description JSON file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .subcommand(
            Command::new("list-realms").about("List known realm names with their codes and colours"),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        process::exit(1);
    });
    let vocabulary = config.vocabulary().unwrap_or_else(|e| {
        eprintln!("Error in vocabulary configuration: {}", e);
        process::exit(1);
    });

    match matches.subcommand() {
        Some(("parse", sub)) => {
            let text = sub.get_one::<String>("text").unwrap();
            let graph = parse_text(text, config.parse.strict);
            print_graph(&graph, &config.output.format, &vocabulary);
        }
        Some(("generate", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_generate_command(path);
        }
        Some(("normalize", sub)) => {
            let text = sub.get_one::<String>("text").unwrap();
            let graph = parse_text(text, config.parse.strict);
            println!("{graph}");
        }
        Some(("validate", sub)) => {
            let text = sub.get_one::<String>("text").unwrap();
            let graph = parse_text(text, true);
            println!("{graph}");
        }
        Some(("convert", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_convert_command(path, &config.output.format, &vocabulary);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        Some(("list-realms", _)) => {
            handle_list_realms_command(&vocabulary);
        }
        _ => unreachable!(),
    }
}

fn text_arg() -> Arg {
    Arg::new("text")
        .help("Realm string, e.g. 'A[Ac](L,O)'")
        .required(true)
        .index(1)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (see list-formats)")
}

fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Reject malformed input instead of skipping it")
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "crs=warn",
        1 => "crs=debug",
        _ => "crs=trace",
    };
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = level.parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then `--config`, then flags given on the subcommand
fn load_config(matches: &ArgMatches) -> Result<CrsConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some((_, sub)) = matches.subcommand() {
        if let Ok(Some(format)) = sub.try_get_one::<String>("format") {
            loader = loader.set_override("output.format", format.as_str())?;
        }
        if let Ok(Some(true)) = sub.try_get_one::<bool>("strict") {
            loader = loader.set_override("parse.strict", true)?;
        }
    }

    loader.build()
}

fn parse_text(text: &str, strict: bool) -> RealmGraph {
    if !strict {
        return parse(text);
    }
    parse_strict(text).unwrap_or_else(|errors| {
        for error in &errors {
            eprintln!("Error: {}", error);
        }
        process::exit(1);
    })
}

fn print_graph(graph: &RealmGraph, format: &str, vocabulary: &Vocabulary) {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(vocabulary.clone()));
    let output = registry.serialize(graph, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    println!("{}", output.trim_end());
}

fn read_input(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(1);
    })
}

/// Handle the generate command
fn handle_generate_command(path: &str) {
    let source = read_input(path);
    let graph: RealmGraph = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error: invalid graph JSON: {}", e);
        process::exit(1);
    });
    println!("{graph}");
}

/// Handle the convert command
fn handle_convert_command(path: &str, format: &str, vocabulary: &Vocabulary) {
    let source = read_input(path);
    let model = ModelDescription::from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    print_graph(&model.to_graph(vocabulary), format, vocabulary);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for (name, description) in registry.descriptions() {
        println!("  {name:<10}{description}");
    }
}

/// Handle the list-realms command
fn handle_list_realms_command(vocabulary: &Vocabulary) {
    println!("Known realms:\n");
    for entry in vocabulary.entries() {
        println!("  {:<4}{:<24}{}", entry.code.as_str(), entry.name, entry.color);
    }
}
