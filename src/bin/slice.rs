//! Command-line interface for slice-parser
//! This binary parses Slice files and prints their syntax tree in different formats.
//!
//! Usage:
//!   slice parse `<path>` [--format json|yaml|treeviz] [--compact]  - Print the syntax tree
//!   slice strip `<path>`                                          - Print the directive-stripped text
//!   slice formats                                                 - List the available output formats
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=slice_parser=debug`) to see pipeline events on stderr.

use clap::{Parser, Subcommand, ValueEnum};
use slice_parser::slice::formats::{to_json, to_treeviz_str, to_yaml};
use slice_parser::slice::{format_source_context, parse, strip, SliceError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "slice", version, about = "A tool for inspecting Slice files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a file and print its syntax tree
    Parse {
        /// Path to the Slice file
        path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Print a file with its conditional-compilation blocks stripped
    Strip {
        /// Path to the Slice file
        path: PathBuf,
    },
    /// List all available output formats
    Formats,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Treeviz,
}

impl Format {
    fn description(self) -> &'static str {
        match self {
            Format::Json => "AST as JSON (pretty-printed unless --compact)",
            Format::Yaml => "AST as YAML",
            Format::Treeviz => "Indented outline of declarations",
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            path,
            format,
            compact,
        } => handle_parse_command(&path, format, compact),
        Command::Strip { path } => handle_strip_command(&path),
        Command::Formats => handle_formats_command(),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_source(path: &Path) -> String {
    debug!(path = %path.display(), "reading source");
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error: cannot read {}: {}", path.display(), e);
        std::process::exit(1);
    })
}

/// Print a failure with the surrounding source lines and exit
fn fail(path: &Path, source: &str, error: &SliceError) -> ! {
    eprintln!("Error in {}: {}", path.display(), error);
    eprint!("{}", format_source_context(source, error.position()));
    std::process::exit(1);
}

/// Handle the parse command
fn handle_parse_command(path: &Path, format: Format, compact: bool) {
    let source = read_source(path);
    let ast = match parse(&source) {
        Ok(ast) => ast,
        Err(e) => fail(path, &source, &e),
    };

    let output = match format {
        Format::Json => to_json(&ast, compact).map_err(|e| e.to_string()),
        Format::Yaml => to_yaml(&ast).map_err(|e| e.to_string()),
        Format::Treeviz => Ok(to_treeviz_str(&ast)),
    };

    match output {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the strip command
fn handle_strip_command(path: &Path) {
    let source = read_source(path);
    match strip(&source) {
        Ok(stripped) => print!("{}", stripped),
        Err(e) => fail(path, &source, &SliceError::from(e)),
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in Format::value_variants() {
        if let Some(name) = format.to_possible_value() {
            println!("  {:<10} {}", name.get_name(), format.description());
        }
    }
}
