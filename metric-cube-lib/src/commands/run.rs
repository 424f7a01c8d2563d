//! Command dispatch logic for metric-cube

use super::{InitArgs, QueryArgs, SummaryArgs, ValidateArgs, init_config, query_cube, summarize_cube, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "metric-cube", version, author, long_about = None)]
#[command(about = "Explore reach and engagement summaries across every combination of dimensions")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: CubeSubcommand,
}

#[derive(Subcommand, Debug)]
enum CubeSubcommand {
    /// Show the summary table for a selection of dimensions
    Query(Box<QueryArgs>),
    /// List every dimension combination and its number of rows
    Summary(Box<SummaryArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `host` - Where output goes and how the process exits
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        CubeSubcommand::Query(query_args) => query_cube(host, query_args),
        CubeSubcommand::Summary(summary_args) => summarize_cube(host, summary_args),
        CubeSubcommand::Init(init_args) => init_config(host, init_args),
        CubeSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
