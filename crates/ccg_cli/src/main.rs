//! ccg: the command-line host for the component cache generator.
//!
//! Reads annotated declarations exported as JSON, runs the generator over
//! them, and writes the companion sources. `ccg check` stops after planning,
//! and `ccg init` writes a default `ccg.toml`.

#![warn(missing_docs)]

mod check;
mod generate;
mod init;
mod pipeline;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Component cache generator.
#[derive(Parser, Debug)]
#[command(name = "ccg", version, about = "Component cache generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `ccg.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate companion sources for annotated declarations.
    Generate(GenerateArgs),
    /// Validate and plan declarations without writing anything.
    Check(CheckArgs),
    /// Write a default `ccg.toml` into the current directory.
    Init {
        /// Overwrite an existing `ccg.toml`.
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for the `ccg generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// JSON file of annotated declarations.
    pub input: PathBuf,

    /// Directory the generated files are written to.
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Run the generator but do not write any files.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `ccg check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// JSON file of annotated declarations.
    pub input: PathBuf,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a config file.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };
    init_tracing(&global);

    let result = match cli.command {
        Command::Generate(ref args) => generate::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::Init { force } => init::run(force, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `--verbose` wins over `--quiet`.
fn init_tracing(global: &GlobalArgs) {
    let level = if global.verbose {
        tracing::Level::DEBUG
    } else if global.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(global.color)
        .with_target(false)
        .without_time()
        .try_init();
}
