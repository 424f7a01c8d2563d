//! Common utilities shared across report generators.

use crate::cube::{AggregateRow, AggregateTable, DimensionKey};

/// Placeholder shown for a missing dimension value in human-oriented output.
pub const MISSING_LABEL: &str = "<missing>";

/// Rows of `table` in a stable order: by grouping values, missing before present.
pub fn sorted_rows(table: &AggregateTable) -> Vec<&AggregateRow> {
    let mut rows: Vec<_> = table.rows().iter().collect();
    rows.sort_by(|a, b| a.dimensions.cmp(&b.dimensions));
    rows
}

/// Format a sum without rounding; whole numbers print without a fractional part.
pub fn format_sum(value: f64) -> String {
    value.to_string()
}

/// File name an exported table is saved under, e.g. `metrics_brand_month.csv`.
pub fn export_file_name(key: &DimensionKey, extension: &str) -> String {
    let mut name = String::from("metrics");
    for dimension in key.iter() {
        name.push('_');
        name.push_str(dimension);
    }
    name.push('.');
    name.push_str(extension);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sum_keeps_precision() {
        assert_eq!(format_sum(8.0), "8");
        assert_eq!(format_sum(2.5), "2.5");
        assert_eq!(format_sum(0.0), "0");
    }

    #[test]
    fn test_export_file_name_uses_canonical_order() {
        let key = DimensionKey::new(["month", "brand"]).unwrap();
        assert_eq!(export_file_name(&key, "csv"), "metrics_brand_month.csv");
    }

    #[test]
    fn test_sorted_rows_puts_missing_first() {
        let key = DimensionKey::new(["brand"]).unwrap();
        let row = |value: Option<&str>| AggregateRow {
            dimensions: vec![value.map(Into::into)].into_boxed_slice(),
            reach_count: 1,
            reach_sum: 1.0,
            engagement_count: 0,
            engagement_sum: 0.0,
        };
        let table = AggregateTable::new(key, vec![row(Some("B")), row(None), row(Some("A"))]);

        let order: Vec<Option<&str>> = sorted_rows(&table).iter().map(|row| row.dimensions[0].as_deref()).collect();
        assert_eq!(order, [None, Some("A"), Some("B")]);
    }
}
