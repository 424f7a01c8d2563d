use super::{AggregateTable, Cube, CubeError, DimensionKey, KeyExtractor, aggregate, enumerate_subsets, merge};
use crate::records::{MetricCategory, Observation, RecordStore};
use compact_str::CompactString;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;

/// Log target for cube building
const LOG_TARGET: &str = "     build";

/// Upper bound on configured dimensions; the cube holds `2^N - 1` tables.
pub const MAX_DIMENSIONS: usize = 20;

/// Materializes a [`Cube`] for a fixed, ordered list of dimensions.
#[derive(Debug, Clone)]
pub struct CubeBuilder {
    dimensions: Box<[CompactString]>,
    parallel: bool,
}

impl CubeBuilder {
    /// Create a builder for the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains a name twice, or is longer than
    /// [`MAX_DIMENSIONS`].
    pub fn new<I, S>(dimensions: I) -> Result<Self, CubeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dimensions: Box<[CompactString]> = dimensions.into_iter().map(|name| CompactString::from(name.as_ref())).collect();

        if dimensions.is_empty() {
            return Err(CubeError::NoDimensions);
        }

        if dimensions.len() > MAX_DIMENSIONS {
            return Err(CubeError::TooManyDimensions {
                count: dimensions.len(),
                max: MAX_DIMENSIONS,
            });
        }

        let mut seen = FxHashSet::default();
        for name in &dimensions {
            if !seen.insert(name.as_str()) {
                return Err(CubeError::DuplicateDimension(name.clone()));
            }
        }

        Ok(Self { dimensions, parallel: true })
    }

    /// Choose whether dimension combinations are computed on the rayon pool.
    ///
    /// Results are identical either way.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn dimensions(&self) -> &[CompactString] {
        &self.dimensions
    }

    /// Build the cube for every non-empty combination of the configured dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::UnknownDimension`] if a configured dimension is not part of
    /// the store's schema. This is checked before any aggregation starts.
    pub fn build(&self, store: &RecordStore) -> Result<Cube, CubeError> {
        if let Some(unknown) = self.dimensions.iter().find(|name| store.position(name).is_none()) {
            return Err(CubeError::UnknownDimension(unknown.clone()));
        }

        let start = Instant::now();
        let keys: Vec<DimensionKey> = enumerate_subsets(&self.dimensions).collect();
        log::info!(
            target: LOG_TARGET,
            "Building {} dimension combinations over {} observations",
            keys.len(),
            store.len()
        );

        let (reach, engagement): (Vec<&Observation>, Vec<&Observation>) =
            store.iter().partition(|observation| observation.category() == MetricCategory::Reach);
        log::debug!(target: LOG_TARGET, "{} reach and {} engagement observations", reach.len(), engagement.len());

        let build_one = |key: DimensionKey| -> Result<(DimensionKey, AggregateTable), CubeError> {
            let extractor = KeyExtractor::new(store, key.iter())?;
            let reached = aggregate(reach.iter().copied(), &extractor);
            let engaged = aggregate(engagement.iter().copied(), &extractor);
            let rows = merge(reached, &engaged);

            log::trace!(target: LOG_TARGET, "Built [{key}] with {} rows", rows.len());
            Ok((key.clone(), AggregateTable::new(key, rows)))
        };

        let tables: FxHashMap<DimensionKey, AggregateTable> = if self.parallel {
            keys.into_par_iter().map(build_one).collect::<Result<_, _>>()?
        } else {
            keys.into_iter().map(build_one).collect::<Result<_, _>>()?
        };

        log::debug!(target: LOG_TARGET, "Finished building {} tables in {:.3}s", tables.len(), start.elapsed().as_secs_f64());
        Ok(Cube::new(self.dimensions.clone(), tables))
    }
}
