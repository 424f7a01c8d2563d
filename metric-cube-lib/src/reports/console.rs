use super::common;
use crate::Result;
use crate::cube::{AggregateTable, METRIC_COLUMNS};
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Render `table` as an aligned text table.
pub fn generate<W: Write>(table: &AggregateTable, use_colors: bool, writer: &mut W) -> Result<()> {
    let header: Vec<&str> = table.key().iter().chain(METRIC_COLUMNS).collect();
    let dimension_count = table.key().len();

    let cells: Vec<Vec<String>> = common::sorted_rows(table)
        .into_iter()
        .map(|row| {
            row.dimensions
                .iter()
                .map(|value| value.as_deref().unwrap_or(common::MISSING_LABEL).to_string())
                .chain([
                    row.reach_count.to_string(),
                    common::format_sum(row.reach_sum),
                    row.engagement_count.to_string(),
                    common::format_sum(row.engagement_sum),
                ])
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(column, name)| {
            cells
                .iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .fold(name.chars().count(), usize::max)
        })
        .collect();

    let mut line = String::new();
    for (column, name) in header.iter().enumerate() {
        let padded = pad(name, widths[column], column >= dimension_count);
        if use_colors {
            write!(line, "{}", padded.bold())?;
        } else {
            line.push_str(&padded);
        }
    }
    writeln!(writer, "{}", line.trim_end())?;

    let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(writer, "{}", "─".repeat(rule))?;

    for row in &cells {
        let mut line = String::new();
        for (column, cell) in row.iter().enumerate() {
            let padded = pad(cell, widths[column], column >= dimension_count);
            if use_colors && column < dimension_count && cell == common::MISSING_LABEL {
                write!(line, "{}", padded.dimmed())?;
            } else {
                line.push_str(&padded);
            }
        }
        writeln!(writer, "{}", line.trim_end())?;
    }

    Ok(())
}

/// Pad a cell to `width`, right-aligning numbers, with a two-space gutter after it.
fn pad(text: &str, width: usize, numeric: bool) -> String {
    if numeric {
        format!("{text:>width$}  ")
    } else {
        format!("{text:<width$}  ")
    }
}
