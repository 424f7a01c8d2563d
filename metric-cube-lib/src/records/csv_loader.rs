use super::{DimensionValue, MetricCategory, RecordStore};
use crate::Result;
use crate::cube::CubeError;
use camino::Utf8Path;
use compact_str::CompactString;
use csv::{Reader, StringRecord};
use ohno::{IntoAppError, app_err};
use std::fs::File;
use std::io::Read;
use std::time::Instant;

/// Log target for record loading
const LOG_TARGET: &str = "   records";

/// Names of the CSV columns that feed a [`RecordStore`].
#[derive(Debug, Clone, Copy)]
pub struct CsvColumns<'a> {
    pub dimensions: &'a [String],
    pub category: &'a str,
    pub subject: &'a str,
    pub value: &'a str,
}

/// Header positions resolved from a [`CsvColumns`] description.
#[derive(Debug)]
struct ColumnPositions {
    dimensions: Box<[usize]>,
    category: usize,
    subject: usize,
    value: usize,
}

/// Load every row of a CSV file into a new [`RecordStore`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, if a configured column is absent from
/// the header, or if a row carries a non-numeric value.
pub fn load_csv(path: &Utf8Path, columns: &CsvColumns<'_>) -> Result<RecordStore> {
    let start = Instant::now();
    log::debug!(target: LOG_TARGET, "Opening '{path}'");

    let file = File::open(path).into_app_err_with(|| format!("opening data file '{path}'"))?;
    let store = load_csv_from_reader(file, columns).into_app_err_with(|| format!("loading data file '{path}'"))?;

    log::debug!(target: LOG_TARGET, "Finished loading '{path}' in {:.3}s", start.elapsed().as_secs_f64());
    Ok(store)
}

/// Load CSV rows from any reader into a new [`RecordStore`].
///
/// Empty dimension cells become the missing marker. Rows whose category is not exactly
/// `REACH` or `ENGAGEMENT` are skipped. A blank subject is not counted as a subject and a
/// blank or `NaN` value adds nothing to sums; such rows still belong to their group.
///
/// # Errors
///
/// Same conditions as [`load_csv`].
pub fn load_csv_from_reader(reader: impl Read, columns: &CsvColumns<'_>) -> Result<RecordStore> {
    let mut csv_reader = Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let positions = resolve_columns(&headers, columns)?;

    let mut store = RecordStore::new(columns.dimensions)?;
    let mut record = StringRecord::new();
    let mut skipped = 0_u64;
    let mut incomplete = 0_u64;
    let mut row_number = 1_u64;

    while csv_reader.read_record(&mut record)? {
        row_number += 1;

        let category_cell = record.get(positions.category).unwrap_or_default();
        let Ok(category) = category_cell.parse::<MetricCategory>() else {
            log::trace!(target: LOG_TARGET, "Skipping row {row_number} with category '{category_cell}'");
            skipped += 1;
            continue;
        };

        let subject = record
            .get(positions.subject)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(CompactString::from);

        let value_cell = record.get(positions.value).unwrap_or_default().trim();
        let value = if value_cell.is_empty() {
            None
        } else {
            let parsed = value_cell
                .parse::<f64>()
                .into_app_err_with(|| format!("row {row_number} has non-numeric value '{value_cell}' in column '{}'", columns.value))?;
            Some(parsed).filter(|v| !v.is_nan())
        };

        if subject.is_none() || value.is_none() {
            log::trace!(target: LOG_TARGET, "Row {row_number} has a blank subject or value");
            incomplete += 1;
        }

        let dimensions: Box<[DimensionValue]> = positions
            .dimensions
            .iter()
            .map(|&position| record.get(position).filter(|cell| !cell.is_empty()).map(CompactString::from))
            .collect();

        store.push_row(dimensions, category, subject, value);
    }

    log::info!(target: LOG_TARGET, "Loaded {} observations", store.len());
    if skipped > 0 {
        log::warn!(target: LOG_TARGET, "Skipped {skipped} rows with a metric category other than REACH or ENGAGEMENT");
    }
    if incomplete > 0 {
        log::warn!(target: LOG_TARGET, "Loaded {incomplete} rows with a blank subject or value; they are not counted or summed");
    }

    Ok(store)
}

/// Check that a CSV file's header carries every configured column without reading any rows.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a configured column is absent.
pub fn check_header(path: &Utf8Path, columns: &CsvColumns<'_>) -> Result<()> {
    let file = File::open(path).into_app_err_with(|| format!("opening data file '{path}'"))?;
    let mut csv_reader = Reader::from_reader(file);
    let headers = csv_reader.headers().into_app_err_with(|| format!("reading header of '{path}'"))?;
    let _ = resolve_columns(headers, columns)?;
    Ok(())
}

fn resolve_columns(headers: &StringRecord, columns: &CsvColumns<'_>) -> Result<ColumnPositions> {
    let find = |name: &str| headers.iter().position(|header| header.trim() == name);

    let dimensions = columns
        .dimensions
        .iter()
        .map(|name| find(name).ok_or_else(|| CubeError::UnknownDimension(name.into())))
        .collect::<Result<Box<[usize]>, CubeError>>()?;

    let required = |name: &str| find(name).ok_or_else(|| app_err!("required column '{name}' is missing from the data header"));

    Ok(ColumnPositions {
        dimensions,
        category: required(columns.category)?,
        subject: required(columns.subject)?,
        value: required(columns.value)?,
    })
}
