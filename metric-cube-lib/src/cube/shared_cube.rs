use super::{Cube, CubeBuilder, CubeError};
use crate::records::RecordStore;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Log target for cube publication
const LOG_TARGET: &str = "     cache";

/// The currently published [`Cube`], replaceable while readers hold older snapshots.
///
/// A rebuild constructs the new cube completely before publishing it. Readers that
/// loaded the previous cube keep a consistent view of it, and a failed rebuild leaves
/// the published cube untouched.
#[derive(Debug)]
pub struct SharedCube {
    current: ArcSwap<Cube>,
}

impl SharedCube {
    #[must_use]
    pub fn new(cube: Cube) -> Self {
        Self {
            current: ArcSwap::from_pointee(cube),
        }
    }

    /// Build an initial cube and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the builder's configuration error.
    pub fn build(builder: &CubeBuilder, store: &RecordStore) -> Result<Self, CubeError> {
        builder.build(store).map(Self::new)
    }

    /// A snapshot of the currently published cube.
    #[must_use]
    pub fn load(&self) -> Arc<Cube> {
        self.current.load_full()
    }

    /// Build a new cube from `store` and publish it.
    ///
    /// # Errors
    ///
    /// Returns the builder's configuration error; the previous cube stays published.
    pub fn rebuild(&self, builder: &CubeBuilder, store: &RecordStore) -> Result<Arc<Cube>, CubeError> {
        let cube = Arc::new(builder.build(store)?);
        self.current.store(Arc::clone(&cube));
        log::info!(target: LOG_TARGET, "Published a cube with {} dimension combinations", cube.len());
        Ok(cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MetricCategory;

    fn store(subjects: &[&str]) -> RecordStore {
        let mut store = RecordStore::new(["brand", "month"]).unwrap();
        for &subject in subjects {
            store
                .push([("brand", Some("A")), ("month", Some("2024-01"))], MetricCategory::Reach, subject, 1.0)
                .unwrap();
        }
        store
    }

    #[test]
    fn test_rebuild_replaces_published_cube() {
        let builder = CubeBuilder::new(["brand", "month"]).unwrap();
        let shared = SharedCube::build(&builder, &store(&["1"])).unwrap();

        let before = shared.load();
        let _ = shared.rebuild(&builder, &store(&["1", "2"])).unwrap();
        let after = shared.load();

        assert_eq!(before.lookup(["brand"]).unwrap().rows()[0].reach_count, 1);
        assert_eq!(after.lookup(["brand"]).unwrap().rows()[0].reach_count, 2);
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_cube() {
        let builder = CubeBuilder::new(["brand", "month"]).unwrap();
        let shared = SharedCube::build(&builder, &store(&["1"])).unwrap();

        let other_schema = RecordStore::new(["brand"]).unwrap();
        let err = shared.rebuild(&builder, &other_schema).unwrap_err();
        assert_eq!(err, CubeError::UnknownDimension("month".into()));

        let current = shared.load();
        assert_eq!(current.len(), 3);
        assert_eq!(current.lookup(["month", "brand"]).unwrap().len(), 1);
    }
}
