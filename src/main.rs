//! CLI entry point for the interface-satisfaction analysis engine.
//!
//! Each verb runs one stateless query and prints a single JSON line on
//! stdout. Empty results exit 0; only a malformed invocation or a process
//! boundary fault exits non-zero.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use golens::analysis::query;
use golens::io::{ExitCode, ImplementationsResponse, InterfacesResponse, OutputManager};
use golens::{AnalysisResult, Settings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Parser)]
#[command(
    name = "golens",
    version,
    about = "Structural interface-satisfaction analysis for Go source trees",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to a custom golens.toml settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find implementations of an interface method under a directory tree
    FindImplementations {
        /// Root directory to scan
        root: PathBuf,
        /// Interface method name to locate
        method_name: String,
    },

    /// Find interfaces declaring a method under a directory tree
    FindInterfaces {
        /// Root directory to scan
        root: PathBuf,
        /// Method name to look for
        method_name: String,
    },

    /// List every interface method declared in one file
    FindFileInterfaces {
        /// Source file to analyze
        file: PathBuf,
    },

    /// List methods in one file whose type satisfies a nearby interface
    FindFileImplementations {
        /// Source file to analyze
        file: PathBuf,
    },

    /// Summarize interface/implementation relations for one package directory
    AnalyzePackageInterfaces {
        /// Package directory (non-recursive)
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.status_code());
            std::process::exit(ExitCode::from_error(&e).into());
        }
    };

    init_tracing(&settings);

    let mut output = OutputManager::new();
    let code = match run(&cli.command, &settings, &mut output) {
        Ok(code) => code,
        Err(e) => output.error(&e).unwrap_or(ExitCode::GeneralError),
    };

    std::process::exit(code.into());
}

fn load_settings(cli: &Cli) -> AnalysisResult<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

fn init_tracing(settings: &Settings) {
    let default_level = if settings.debug { "golens=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(
    command: &Commands,
    settings: &Settings,
    output: &mut OutputManager,
) -> AnalysisResult<ExitCode> {
    match command {
        Commands::FindImplementations { root, method_name } => {
            let methods = query::tree_implementations(settings, root, method_name)?;
            output.emit(&ImplementationsResponse::without_end_locations(methods))
        }
        Commands::FindInterfaces { root, method_name } => {
            let interfaces = query::tree_interfaces(settings, root, method_name)?;
            output.emit(&InterfacesResponse::without_end_locations(interfaces))
        }
        Commands::FindFileInterfaces { file } => {
            let interfaces = query::file_interfaces(settings, file)?;
            output.emit(&InterfacesResponse::with_end_locations(interfaces))
        }
        Commands::FindFileImplementations { file } => {
            let methods = query::file_implementations(settings, file)?;
            output.emit(&ImplementationsResponse::with_end_locations(methods))
        }
        Commands::AnalyzePackageInterfaces { dir } => {
            let summary = query::package_summary(settings, dir)?;
            output.emit(&summary)
        }
    }
}
