use super::common;
use crate::Result;
use crate::cube::AggregateTable;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(table: &AggregateTable, writer: &mut W) -> Result<()> {
    let rows = common::sorted_rows(table);
    let sorted = AggregateTable::new(table.key().clone(), rows.into_iter().cloned().collect());

    let output = json!({
        "dimensions": table.key().names(),
        "rows": sorted,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
