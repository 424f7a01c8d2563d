use super::common;
use crate::Result;
use crate::cube::{AggregateTable, METRIC_COLUMNS};
use core::fmt::Write;
use std::borrow::Cow;

/// Write `table` as CSV: one column per grouping dimension followed by the metric columns.
///
/// Missing dimension values are written as empty cells.
pub fn generate<W: Write>(table: &AggregateTable, writer: &mut W) -> Result<()> {
    let header = table.key().iter().chain(METRIC_COLUMNS).map(escape_csv).collect::<Vec<_>>().join(",");
    writeln!(writer, "{header}")?;

    for row in common::sorted_rows(table) {
        for value in &row.dimensions {
            write!(writer, "{},", escape_csv(value.as_deref().unwrap_or_default()))?;
        }

        writeln!(
            writer,
            "{},{},{},{}",
            row.reach_count,
            common::format_sum(row.reach_sum),
            row.engagement_count,
            common::format_sum(row.engagement_sum)
        )?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{AggregateRow, DimensionKey};

    fn table(rows: Vec<AggregateRow>) -> AggregateTable {
        AggregateTable::new(DimensionKey::new(["indication", "brand"]).unwrap(), rows)
    }

    fn row(brand: &str, indication: Option<&str>, reach_count: u64, reach_sum: f64) -> AggregateRow {
        AggregateRow {
            dimensions: vec![Some(brand.into()), indication.map(Into::into)].into_boxed_slice(),
            reach_count,
            reach_sum,
            engagement_count: 0,
            engagement_sum: 0.0,
        }
    }

    #[test]
    fn test_escape_csv_no_special_chars() {
        let result = escape_csv("hello world");
        assert_eq!(result, "hello world");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        let result = escape_csv("hello \"world\"");
        assert_eq!(result, "\"hello \"\"world\"\"\"");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("hello,world"), "\"hello,world\"");
    }

    #[test]
    fn test_generate_empty_table() {
        let mut output = String::new();
        generate(&table(vec![]), &mut output).unwrap();
        assert_eq!(output, "brand,indication,reach_count,reach_sum,engagement_count,engagement_sum\n");
    }

    #[test]
    fn test_generate_rows() {
        let mut output = String::new();
        generate(&table(vec![row("B", Some("onc"), 1, 2.5), row("A", None, 2, 8.0)]), &mut output).unwrap();
        insta::assert_snapshot!(output, @r"
        brand,indication,reach_count,reach_sum,engagement_count,engagement_sum
        A,,2,8,0,0
        B,onc,1,2.5,0,0
        ");
    }

    #[test]
    fn test_generate_escapes_values() {
        let mut output = String::new();
        generate(&table(vec![row("Acme, Inc", Some("onc"), 1, 1.0)]), &mut output).unwrap();
        assert!(output.contains("\"Acme, Inc\",onc,1,1,0,0"));
    }
}
