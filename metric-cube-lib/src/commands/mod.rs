//! Command-line interface and orchestration for metric-cube
//!
//! This module implements the CLI commands and ties record loading, cube building,
//! and report generation together. It handles argument parsing, configuration
//! management, and the high-level workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **query**: Load a data file, build the cube, and show the table for a selection
//!   of dimensions on the terminal and/or save it as CSV or JSON
//! - **summary**: Build the cube and list every dimension combination with its row count
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file, and optionally a data file's header against it
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. The data-driven commands follow the same pattern:
//!
//! 1. Set up logging and load configuration
//! 2. Load observations from CSV into a record store
//! 3. Build the cube over the configured dimensions
//! 4. Look up and render the requested tables
//!
//! Configuration is a TOML file naming the dimensions and the category, subject,
//! and value columns of the data.

mod common;
mod config;
mod host;
mod init;
mod query;
mod run;
mod summary;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use query::{QueryArgs, query_cube};
pub use run::run;
pub use summary::{SummaryArgs, summarize_cube};
pub use validate::{ValidateArgs, validate_config};
