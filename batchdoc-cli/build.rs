use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by FormatRegistry::with_defaults
// We need to duplicate this here since build scripts can't access the library crates
const AVAILABLE_FORMATS: &[&str] = &["docx", "json", "treeviz"];

fn format_arg() -> Arg {
    Arg::new("to")
        .long("to")
        .help("Output format")
        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
        .value_hint(ValueHint::Other)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path")
        .value_hint(ValueHint::FilePath)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("batchdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export batch request results to formatted documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a batchdoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .help("Override a configuration key")
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .about("Export batch results")
                .arg(input_arg())
                .arg(format_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("markdown")
                .about("Convert a single Markdown file")
                .arg(input_arg())
                .arg(Arg::new("style").long("style").value_hint(ValueHint::Other))
                .arg(format_arg())
                .arg(output_arg()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "batchdoc", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "batchdoc", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "batchdoc", &outdir)?;

    Ok(())
}
