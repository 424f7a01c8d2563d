#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for metric-cube
//!
//! This library precomputes reach and engagement summaries for every combination
//! of a fixed set of categorical dimensions and serves them by dimension selection.
//!
//! # Module Organization
//!
//! - [`records`]: Observation records and their in-memory store
//! - [`cube`]: Subset enumeration, grouped aggregation, merging, and the cube index
//! - [`reports`]: Rendering of a looked-up table as CSV, JSON, or console text
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod cube;
pub mod records;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
pub use crate::cube::{AggregateRow, AggregateTable, Cube, CubeBuilder, CubeError, DimensionKey, SharedCube};
pub use crate::records::{MetricCategory, RecordStore};
