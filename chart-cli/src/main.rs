// Command-line interface for chart data
//
// This binary provides commands for converting, detecting and fetching
// chart data.
//
// The main role for the chart program is to interface with chart data
// content: converting between formats, sniffing what format a blob of text
// is in, and pulling data from URLs. The core capabilities use the
// chart-babel crate; this binary is a thin shell over that library.
//
// Converting:
//
// The conversion needs a from and to pair. The from can be auto-detected
// from the file extension (or, failing that, from the content itself),
// while being overridable by an explicit --from flag. The to defaults to
// the configured export format.
// Usage:
//  chart <input> [--to <format>] [--from <format>] [--output <file>]  - Convert (default)
//  chart convert <input> ...             - Same as above (explicit)
//  chart detect <input>                  - Report the sniffed format
//  chart fetch <url> [--to <format>]     - Fetch data from a URL and convert
//  chart sample <name> [--to <format>]   - Emit a built-in sample dataset
//  chart --list-formats                  - List supported formats

use chart_babel::session::samples;
use chart_babel::{detect, source, ChartData, FormatId, FormatRegistry};
use chart_config::{ChartConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::path::Path;

fn format_names() -> Vec<&'static str> {
    FormatId::ALL.iter().map(|id| id.name()).collect()
}

fn build_cli() -> Command {
    Command::new("chart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting chart data")
        .long_about(
            "chart is a command-line tool for working with chart data files.\n\n\
            Commands:\n  \
            - convert: Transform between data formats (CSV, JSON, Markdown, etc.)\n  \
            - detect:  Report which format a file is in\n  \
            - fetch:   Pull data from a URL and convert it\n  \
            - sample:  Emit a built-in sample dataset\n\n\
            Examples:\n  \
            chart data.csv --to json                # Convert CSV to JSON (stdout)\n  \
            chart data.md --to csv -o out.csv       # Markdown table to CSV file\n  \
            chart detect mystery.txt                # Sniff the content\n  \
            chart fetch https://example.com/d.json  # Fetch and re-emit",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported formats and their capabilities")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chart.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between data formats (default command)")
                .long_about(
                    "Convert chart data between formats.\n\n\
                    The source format is auto-detected from the file extension, or from\n\
                    the content itself when the extension is unknown. Output goes to\n\
                    stdout by default, or use -o to write a file.\n\n\
                    Only tabular data has textual exporters; hierarchies, flows and word\n\
                    lists can only be exported as JSON.\n\n\
                    Examples:\n  \
                    chart convert data.csv --to json        # CSV to JSON (stdout)\n  \
                    chart convert data.json --to markdown   # JSON to a pipe table\n  \
                    chart data.csv --to json                # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected if not specified)")
                        .long_help(
                            "Source format to convert from.\n\n\
                            If not specified, the format is auto-detected from the file\n\
                            extension, falling back to content sniffing. Use this option\n\
                            to override auto-detection.",
                        )
                        .value_parser(clap::builder::PossibleValuesParser::new(format_names()))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to the configured export format)")
                        .value_parser(clap::builder::PossibleValuesParser::new(format_names()))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Report which format a file is in (extension first, then content)")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("fetch")
                .about("Fetch chart data from a URL and convert it")
                .long_about(
                    "Fetch data over HTTP and convert it.\n\n\
                    The format is decided by the response content type (JSON wins),\n\
                    then the URL path's extension, then content sniffing.\n\n\
                    Examples:\n  \
                    chart fetch https://example.com/sales.csv --to json\n  \
                    chart fetch https://example.com/api/data -o data.json",
                )
                .arg(
                    Arg::new("url")
                        .help("URL to fetch")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Url),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to the configured export format)")
                        .value_parser(clap::builder::PossibleValuesParser::new(format_names()))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("sample")
                .about("Emit a built-in sample dataset")
                .arg(
                    Arg::new("name")
                        .help("Sample name")
                        .required(true)
                        .index(1)
                        .value_parser(clap::builder::PossibleValuesParser::new(samples::NAMES)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to json)")
                        .value_parser(clap::builder::PossibleValuesParser::new(format_names()))
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // First, try normal parsing
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // If the first arg looks like a file rather than a subcommand,
            // inject "convert" and retry
            if args.len() > 1
                && !args[1].starts_with('-')
                && !["convert", "detect", "fetch", "sample", "help"].contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &config);
        }
        Some(("detect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_detect_command(input);
        }
        Some(("fetch", sub_matches)) => {
            let url = sub_matches
                .get_one::<String>("url")
                .expect("url is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_fetch_command(url, to, output, &config);
        }
        Some(("sample", sub_matches)) => {
            let name = sub_matches
                .get_one::<String>("name")
                .expect("name is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            handle_sample_command(name, to);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: Option<&str>,
    to: Option<&str>,
    output: Option<&str>,
    config: &ChartConfig,
) {
    let registry = FormatRegistry::with_defaults();

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    // --from, then file extension, then content sniffing
    let from_id = match from {
        Some(name) => resolve_format(name),
        None => registry
            .detect_format_from_filename(input)
            .unwrap_or_else(|| detect::sniff(&source)),
    };

    let data = registry.parse(&source, from_id).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let to_id = resolve_target(to, config);
    emit(&registry, &data, to_id, output);
}

/// Handle the detect command
fn handle_detect_command(input: &str) {
    let registry = FormatRegistry::with_defaults();

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    // the extension is the stronger signal, content sniffing the fallback
    let id = registry
        .detect_format_from_filename(input)
        .unwrap_or_else(|| detect::sniff(&source));
    println!("{id}");
}

/// Handle the fetch command
fn handle_fetch_command(url: &str, to: Option<&str>, output: Option<&str>, config: &ChartConfig) {
    let registry = FormatRegistry::with_defaults();

    let data = source::fetch_url_with_timeout(&registry, url, config.fetch.timeout())
        .unwrap_or_else(|e| {
            eprintln!("Fetch error: {e}");
            std::process::exit(1);
        });

    let to_id = resolve_target(to, config);
    emit(&registry, &data, to_id, output);
}

/// Handle the sample command
fn handle_sample_command(name: &str, to: Option<&str>) {
    let registry = FormatRegistry::with_defaults();

    let data = samples::by_name(name).unwrap_or_else(|| {
        eprintln!("Unknown sample '{name}'");
        std::process::exit(1);
    });

    // samples include non-tabular shapes, so JSON is the safe default
    let to_id = to.map(resolve_format).unwrap_or(FormatId::Json);
    emit(&registry, &data, to_id, None);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Supported formats:\n");
    for id in FormatId::ALL {
        let format = match registry.get(id) {
            Ok(f) => f,
            Err(_) => continue,
        };
        let capabilities = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "parse, serialize",
            (true, false) => "parse",
            (false, true) => "serialize",
            (false, false) => "-",
        };
        println!("  {:<10} {:<18} {}", id.name(), capabilities, format.description());
    }
}

fn resolve_format(name: &str) -> FormatId {
    FormatId::from_name(name).unwrap_or_else(|| {
        eprintln!("Unknown format '{name}'");
        std::process::exit(1);
    })
}

fn resolve_target(to: Option<&str>, config: &ChartConfig) -> FormatId {
    match to {
        Some(name) => resolve_format(name),
        None => config.export.default_format_id().unwrap_or_else(|err| {
            eprintln!("Failed to resolve export format: {err}");
            std::process::exit(1);
        }),
    }
}

/// Serialize and write to the requested destination.
fn emit(registry: &FormatRegistry, data: &ChartData, to: FormatId, output: Option<&str>) {
    let text = registry.serialize(data, to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(Path::new(path), text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ChartConfig {
    let loader = Loader::new().with_optional_file("chart.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
