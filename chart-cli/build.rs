use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names from chart-babel's FormatId.
// We need to duplicate this here since build scripts can't access dependency modules.
const AVAILABLE_FORMATS: &[&str] = &[
    "csv", "tsv", "txt", "json", "xml", "yaml", "markdown", "html", "sql",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("chart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting chart data")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the data file")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "chart", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "chart", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "chart", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
