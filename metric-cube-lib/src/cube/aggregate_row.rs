use super::DimensionKey;
use crate::records::DimensionValue;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

pub const REACH_COUNT_COLUMN: &str = "reach_count";
pub const REACH_SUM_COLUMN: &str = "reach_sum";
pub const ENGAGEMENT_COUNT_COLUMN: &str = "engagement_count";
pub const ENGAGEMENT_SUM_COLUMN: &str = "engagement_sum";

/// Names of the metric columns, in output order.
pub const METRIC_COLUMNS: [&str; 4] = [REACH_COUNT_COLUMN, REACH_SUM_COLUMN, ENGAGEMENT_COUNT_COLUMN, ENGAGEMENT_SUM_COLUMN];

/// One merged output row: a dimension value combination with both metric families.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    /// Grouping values, aligned with the names of the owning table's [`DimensionKey`].
    pub dimensions: Box<[DimensionValue]>,
    pub reach_count: u64,
    pub reach_sum: f64,
    pub engagement_count: u64,
    pub engagement_sum: f64,
}

/// The merged rows of one dimension combination.
///
/// Row order is not meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateTable {
    key: DimensionKey,
    rows: Vec<AggregateRow>,
}

impl AggregateTable {
    #[must_use]
    pub const fn new(key: DimensionKey, rows: Vec<AggregateRow>) -> Self {
        Self { key, rows }
    }

    #[must_use]
    pub const fn key(&self) -> &DimensionKey {
        &self.key
    }

    #[must_use]
    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the row whose grouping values equal `values`.
    #[must_use]
    pub fn find(&self, values: &[Option<&str>]) -> Option<&AggregateRow> {
        self.rows.iter().find(|row| {
            row.dimensions.len() == values.len() && row.dimensions.iter().zip(values).all(|(have, want)| have.as_deref() == *want)
        })
    }
}

/// Serializes as a sequence of flat records: one entry per grouping dimension
/// (null when missing) followed by the metric columns.
impl Serialize for AggregateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.iter().map(|row| NamedRow { key: &self.key, row }))
    }
}

struct NamedRow<'a> {
    key: &'a DimensionKey,
    row: &'a AggregateRow,
}

impl Serialize for NamedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.key.len() + METRIC_COLUMNS.len()))?;
        for (name, value) in self.key.iter().zip(self.row.dimensions.iter()) {
            map.serialize_entry(name, &value.as_deref())?;
        }
        map.serialize_entry(REACH_COUNT_COLUMN, &self.row.reach_count)?;
        map.serialize_entry(REACH_SUM_COLUMN, &self.row.reach_sum)?;
        map.serialize_entry(ENGAGEMENT_COUNT_COLUMN, &self.row.engagement_count)?;
        map.serialize_entry(ENGAGEMENT_SUM_COLUMN, &self.row.engagement_sum)?;
        map.end()
    }
}
