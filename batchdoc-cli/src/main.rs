// Command-line interface for batchdoc
//
// This binary turns batch results into a document, and converts single Markdown files with the
// same styling rules so a style set can be tried out before running a whole batch.
//
// Usage:
//  batchdoc <input> [--to <format>] [--output <file>]          - Export batch results (default)
//  batchdoc export <input> [--to <format>] [--output <file>]   - Same as above (explicit)
//  batchdoc markdown <input.md> [--style <name>] [--to <format>] [--output <file>]
//  batchdoc --list-formats                                      - List available output formats
//
// Configuration:
//
// The embedded defaults are layered with ./batchdoc.toml (if present), then with the file given
// by --config, then with --set <key>=<value> overrides, e.g.
//  batchdoc results.jsonl -o out.docx --set styles.prompt.font_size=14
//
// The output format is --to when given, else the one matching the -o file extension, else the
// configured output.format.

use batchdoc_config::{BatchdocConfig, Loader};
use batchdoc_core::ir::nodes::Document;
use batchdoc_core::{
    build_document, load_batch, ExportOptions, FormatRegistry, MarkdownConverter,
    StyleOverrides,
};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};

const SUBCOMMANDS: &[&str] = &["export", "markdown", "help"];

// Names registered by FormatRegistry::with_defaults, mirrored in build.rs
const AVAILABLE_FORMATS: &[&str] = &["docx", "json", "treeviz"];

fn build_cli() -> Command {
    Command::new("batchdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export batch request results to formatted documents")
        .long_about(
            "batchdoc turns the results of a batch of model requests into one document.\n\n\
            Succeeded requests become prompt/response pairs, with the Markdown responses\n\
            converted to headings, lists, tables and styled text. Failed requests are listed\n\
            in an annex together with their error payloads.\n\n\
            Examples:\n  \
            batchdoc results.jsonl -o report.docx          # Export to DOCX\n  \
            batchdoc results.json --to treeviz             # Inspect the document tree\n  \
            batchdoc markdown answer.md -o answer.docx     # Convert one Markdown file"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .value_name("PATH")
                .help("Path to a batchdoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override a configuration key (repeatable)")
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (-vv for more detail)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .about("Export batch results (default command)")
                .long_about(
                    "Export a batch results file.\n\n\
                    Accepted inputs:\n  \
                    - a JSON array of results\n  \
                    - a JSON object with a \"results\" array\n  \
                    - JSON Lines, one result per line\n\n\
                    Each result may carry status, prompt_text, clean_response, response,\n\
                    custom_id and error. Results whose status matches export.success_status\n\
                    are successes; every other result goes to the failed requests annex."
                )
                .arg(input_arg("Batch results file (JSON or JSON Lines)"))
                .arg(to_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("markdown")
                .about("Convert a single Markdown file with a configured style")
                .arg(input_arg("Markdown file"))
                .arg(
                    Arg::new("style")
                        .long("style")
                        .help("Registry style applied to the text (defaults to the response style)")
                        .value_hint(ValueHint::Other),
                )
                .arg(to_arg())
                .arg(output_arg()),
        )
}

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn to_arg() -> Arg {
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
        .help("Output file path (defaults to stdout for text formats)")
        .value_hint(ValueHint::FilePath)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file path means the export command.
            if args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "export".to_string()];
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

    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(&matches);

    match matches.subcommand() {
        Some(("export", sub_matches)) => handle_export_command(sub_matches, &config),
        Some(("markdown", sub_matches)) => handle_markdown_command(sub_matches, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Handle the export command
fn handle_export_command(matches: &ArgMatches, config: &BatchdocConfig) {
    let input = required(matches, "input");
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let options = config.export_options();
    let records = load_batch(&source, &options.success_status).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    info!("read {} records from {input}", records.len());

    let doc = build_document(&records, &config.styles, &options).unwrap_or_else(|e| {
        eprintln!("Export error: {e}");
        std::process::exit(1);
    });
    write_output(&doc, matches, config);
}

/// Handle the markdown command
fn handle_markdown_command(matches: &ArgMatches, config: &BatchdocConfig) {
    let input = required(matches, "input");
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let options: ExportOptions = config.export_options();
    let style_name = matches
        .get_one::<String>("style")
        .map(String::as_str)
        .unwrap_or(&options.response_style);
    if config.styles.get(style_name).is_none() {
        warn!("style '{style_name}' is not configured, using defaults");
    }
    let style = config
        .styles
        .resolve(style_name, &StyleOverrides::default());

    let mut doc = Document::new();
    MarkdownConverter::new(options.converter)
        .convert(&mut doc, &source, &style)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });
    write_output(&doc, matches, config);
}

/// Serialize `doc` in the selected format and write it to -o or stdout.
fn write_output(doc: &Document, matches: &ArgMatches, config: &BatchdocConfig) {
    let registry = FormatRegistry::default();
    let output = matches.get_one::<String>("output").map(|s| s.as_str());

    let to = match matches.get_one::<String>("to") {
        Some(to) => to.clone(),
        None => output
            .and_then(|path| registry.detect_format_from_filename(path))
            .unwrap_or_else(|| config.output.format.clone()),
    };
    debug!("writing {to} output");

    let format = registry.get(&to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    if output.is_none() && format.is_binary() {
        eprintln!("Binary formats (like docx) require an output file. Use -o <path>.");
        std::process::exit(1);
    }

    let data = format
        .serialize(doc)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        })
        .into_bytes();

    match output {
        Some(path) => {
            fs::write(path, data).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            info!("wrote {path}");
        }
        None => {
            io::stdout().write_all(&data).unwrap_or_else(|e| {
                eprintln!("Error writing to stdout: {e}");
                std::process::exit(1);
            });
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!("  {format_name:<10}{}", format.description());
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| {
            eprintln!("Error: missing <{name}>");
            std::process::exit(1);
        })
}

fn load_cli_config(matches: &ArgMatches) -> BatchdocConfig {
    let loader = Loader::new().with_optional_file("batchdoc.toml");
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    for raw in matches.get_many::<String>("set").into_iter().flatten() {
        let Some((key, value)) = raw.split_once('=') else {
            eprintln!("Error: --set expects KEY=VALUE, got '{raw}'");
            std::process::exit(1);
        };
        loader = loader
            .set_override(key.trim(), value.trim().to_string())
            .unwrap_or_else(|err| {
                eprintln!("Failed to apply override '{raw}': {err}");
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
