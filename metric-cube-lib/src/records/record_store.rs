use super::{DimensionValue, MetricCategory, Observation};
use crate::cube::CubeError;
use compact_str::CompactString;
use rustc_hash::FxHashSet;

/// An in-memory collection of observations sharing one dimension schema.
///
/// Observations are appended while loading; once the store is handed to a
/// [`CubeBuilder`](crate::cube::CubeBuilder) it is only ever borrowed immutably.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    dimension_names: Box<[CompactString]>,
    observations: Vec<Observation>,
}

impl RecordStore {
    /// Create an empty store whose observations carry the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::DuplicateDimension`] if a name appears more than once.
    pub fn new<I, S>(dimension_names: I) -> Result<Self, CubeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dimension_names: Box<[CompactString]> = dimension_names.into_iter().map(|name| CompactString::from(name.as_ref())).collect();

        let mut seen = FxHashSet::default();
        for name in &dimension_names {
            if !seen.insert(name.as_str()) {
                return Err(CubeError::DuplicateDimension(name.clone()));
            }
        }

        Ok(Self {
            dimension_names,
            observations: Vec::new(),
        })
    }

    /// Append an observation described by a map of dimension name to value.
    ///
    /// Dimensions of the schema that `dimensions` does not mention are recorded as missing.
    /// An empty `subject` is not counted as a subject and a NaN `value` does not add to sums.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::UnknownDimension`] if `dimensions` names a dimension outside the schema.
    pub fn push<'a, I>(&mut self, dimensions: I, category: MetricCategory, subject: impl Into<CompactString>, value: f64) -> Result<(), CubeError>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut values: Box<[DimensionValue]> = vec![None; self.dimension_names.len()].into_boxed_slice();
        for (name, value) in dimensions {
            let position = self.position(name).ok_or_else(|| CubeError::UnknownDimension(name.into()))?;
            values[position] = value.map(CompactString::from);
        }

        let subject: CompactString = subject.into();
        self.push_row(values, category, Some(subject).filter(|s| !s.is_empty()), Some(value).filter(|v| !v.is_nan()));
        Ok(())
    }

    /// Append an observation whose dimension values are already in schema order.
    pub(crate) fn push_row(
        &mut self,
        dimensions: Box<[DimensionValue]>,
        category: MetricCategory,
        subject: Option<CompactString>,
        value: Option<f64>,
    ) {
        debug_assert_eq!(dimensions.len(), self.dimension_names.len());
        self.observations.push(Observation::new(dimensions, category, subject, value));
    }

    #[must_use]
    pub fn dimension_names(&self) -> &[CompactString] {
        &self.dimension_names
    }

    /// Position of `name` in the dimension schema.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.dimension_names.iter().position(|candidate| candidate == name)
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_schema_names_are_rejected() {
        let err = RecordStore::new(["brand", "month", "brand"]).unwrap_err();
        assert_eq!(err, CubeError::DuplicateDimension("brand".into()));
    }

    #[test]
    fn test_unmentioned_dimensions_are_missing() {
        let mut store = RecordStore::new(["brand", "indication"]).unwrap();
        store.push([("brand", Some("A"))], MetricCategory::Reach, "1", 5.0).unwrap();

        let observation = &store.observations()[0];
        assert_eq!(observation.dimension(0), Some("A"));
        assert_eq!(observation.dimension(1), None);
        assert_eq!(observation.subject(), Some("1"));
        assert_eq!(observation.value(), Some(5.0));
    }

    #[test]
    fn test_blank_subject_and_nan_value_are_absent() {
        let mut store = RecordStore::new(["brand"]).unwrap();
        store.push([("brand", Some("A"))], MetricCategory::Reach, "", f64::NAN).unwrap();

        let observation = &store.observations()[0];
        assert_eq!(observation.subject(), None);
        assert_eq!(observation.value(), None);
    }

    #[test]
    fn test_unknown_dimension_is_rejected() {
        let mut store = RecordStore::new(["brand"]).unwrap();
        let err = store.push([("vendor", Some("X"))], MetricCategory::Reach, "1", 1.0).unwrap_err();
        assert_eq!(err, CubeError::UnknownDimension("vendor".into()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_position_follows_schema_order() {
        let store = RecordStore::new(["brand", "month", "vendor"]).unwrap();
        assert_eq!(store.position("vendor"), Some(2));
        assert_eq!(store.position("vehicle"), None);
    }
}
