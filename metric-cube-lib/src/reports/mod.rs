//! Report generation for looked-up cube tables
//!
//! Three generators are provided, each accessed through a `generate` function:
//! - **Console**: Aligned terminal table with optional ANSI styling
//! - **CSV**: Spreadsheet-compatible format with proper escaping
//! - **JSON**: Machine-readable structured data
//!
//! All generators take a single [`AggregateTable`](crate::cube::AggregateTable) and
//! write its rows in a stable order (sorted by grouping values), one column per
//! grouping dimension followed by the four metric columns.

mod common;
mod console;
mod csv;
mod json;

pub use common::export_file_name;
pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;
