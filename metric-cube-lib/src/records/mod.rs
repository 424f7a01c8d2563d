//! Observation records and their in-memory store
//!
//! A [`RecordStore`] owns a flat list of [`Observation`]s that share one dimension
//! schema. Each observation carries a value (or the missing marker) per dimension,
//! a [`MetricCategory`], a subject identifier, and a numeric value.
//!
//! The CSV loader is the only producer used by the command layer, but stores can
//! be populated directly through [`RecordStore::push`] by any other loader.

mod csv_loader;
mod metric_category;
mod observation;
mod record_store;

pub use csv_loader::{CsvColumns, check_header, load_csv, load_csv_from_reader};
pub use metric_category::MetricCategory;
pub use observation::{DimensionValue, Observation};
pub use record_store::RecordStore;
