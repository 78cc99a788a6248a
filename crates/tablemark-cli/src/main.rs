//! tablemark CLI - replace HTML tables with Markdown tables, in place

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tablemark::{pipeline, Alignment, Options, TableConverter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tablemark")]
#[command(version)]
#[command(about = "Replace HTML tables with flat-header Markdown tables, leaving other text untouched", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read `{"html": ...}` and write `{"markdown": ...}` instead of raw text
    #[arg(long)]
    json: bool,

    /// Marker that replaces newlines inside a cell
    #[arg(long)]
    line_break: Option<String>,

    /// Separator between stacked header labels
    #[arg(long)]
    joiner: Option<String>,

    /// Prefix for labels of unnamed columns
    #[arg(long)]
    placeholder_prefix: Option<String>,

    /// Separator row alignment
    #[arg(long, value_enum, ignore_case = true)]
    align: Option<AlignArg>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlignArg {
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
    /// `---`
    None,
}

impl From<AlignArg> for Alignment {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Alignment::Left,
            AlignArg::Center => Alignment::Center,
            AlignArg::Right => Alignment::Right,
            AlignArg::None => Alignment::None,
        }
    }
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        let mut result = Options::default();

        if let Some(line_break) = &cli.line_break {
            result.line_break = line_break.clone();
        }

        if let Some(joiner) = &cli.joiner {
            result.header_joiner = joiner.clone();
        }

        if let Some(prefix) = &cli.placeholder_prefix {
            result.placeholder_prefix = prefix.clone();
        }

        if let Some(align) = cli.align {
            result.alignment = align.into();
        }

        result
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tablemark={level},tablemark_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn run(cli: &Cli, input: &str) -> Result<String> {
    let converter = TableConverter::with_options(Options::from(cli));

    if cli.json {
        pipeline::run_json(input, &converter).context("invalid pipeline input")
    } else {
        Ok(converter.convert(input))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = read_input(cli.input.as_ref())?;
    debug!(bytes = input.len(), json = cli.json, "read input");

    let output = run(&cli, &input)?;
    write_output(cli.output.as_ref(), &output)
}
