//! Argument handling and setup shared between the data-driven commands.

use super::config::Config;
use crate::Result;
use crate::cube::Cube;
use crate::records::load_csv;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use std::time::Instant;

/// Log target for command orchestration
const LOG_TARGET: &str = "  commands";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared between the query and summary commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// CSV file holding one observation per row
    #[arg(value_name = "DATA")]
    pub data: Utf8PathBuf,

    /// Path to configuration file (default is `cube.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

pub struct Common<'a, H: super::Host> {
    pub config: Config,
    host: &'a mut H,
    data: Utf8PathBuf,
    color: ColorMode,
}

impl<'a, H: super::Host> Common<'a, H> {
    /// Set up logging and load the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

        Ok(Self {
            config,
            host,
            data: args.data.clone(),
            color: args.color,
        })
    }

    /// Load the data file and materialize every dimension combination
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be loaded or doesn't match the configuration
    pub fn build_cube(&self) -> Result<Cube> {
        let start = Instant::now();
        let store = load_csv(&self.data, &self.config.columns())?;
        let cube = self.config.builder()?.build(&store)?;

        log::info!(
            target: LOG_TARGET,
            "Built {} dimension combinations from {} observations in {:.3}s",
            cube.len(),
            store.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(cube)
    }

    pub const fn host(&mut self) -> &mut H {
        self.host
    }

    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Initialize logger based on log level
///
/// Subsequent calls are ignored, so commands can be run repeatedly within one process.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
