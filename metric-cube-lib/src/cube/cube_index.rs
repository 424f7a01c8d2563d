use super::{AggregateTable, DimensionKey};
use compact_str::CompactString;
use rustc_hash::FxHashMap;

/// Every materialized dimension combination, keyed canonically.
///
/// A `Cube` is produced whole by [`CubeBuilder::build`](super::CubeBuilder::build)
/// and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Cube {
    dimensions: Box<[CompactString]>,
    tables: FxHashMap<DimensionKey, AggregateTable>,
}

impl Cube {
    pub(super) const fn new(dimensions: Box<[CompactString]>, tables: FxHashMap<DimensionKey, AggregateTable>) -> Self {
        Self { dimensions, tables }
    }

    /// Look up the table for a selection of dimensions.
    ///
    /// The selection is canonicalized first, so order and repetition are irrelevant.
    /// Returns `None` for an empty selection or a combination that was not built,
    /// which is different from a found table that has no rows.
    #[must_use]
    pub fn lookup<I, S>(&self, requested: I) -> Option<&AggregateTable>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        DimensionKey::new(requested).and_then(|key| self.tables.get(&key))
    }

    #[must_use]
    pub fn get(&self, key: &DimensionKey) -> Option<&AggregateTable> {
        self.tables.get(key)
    }

    /// The configured dimensions, in configuration order.
    #[must_use]
    pub fn dimensions(&self) -> &[CompactString] {
        &self.dimensions
    }

    pub fn keys(&self) -> impl Iterator<Item = &DimensionKey> {
        self.tables.keys()
    }

    /// Number of dimension combinations in the cube.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
