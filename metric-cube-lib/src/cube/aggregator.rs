use super::CubeError;
use crate::records::{DimensionValue, Observation, RecordStore};
use compact_str::CompactString;
use rustc_hash::{FxHashMap, FxHashSet};

/// The grouping dimension values of one group, in grouping order.
pub type GroupKey = Box<[DimensionValue]>;

/// Per-group result of [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupAggregate {
    /// Number of distinct subject identifiers in the group.
    pub distinct_subjects: u64,

    /// Sum of the observation values in the group.
    pub sum: f64,
}

/// Pulls the values of a fixed list of dimensions out of observations.
///
/// Dimension names are resolved to schema positions once, so extraction per
/// observation is positional.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    positions: Box<[usize]>,
}

impl KeyExtractor {
    /// Resolve `names` against the schema of `store`.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::UnknownDimension`] if a name is not part of the store's schema.
    pub fn new<I, S>(store: &RecordStore, names: I) -> Result<Self, CubeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positions = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                store.position(name).ok_or_else(|| CubeError::UnknownDimension(name.into()))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { positions })
    }

    fn borrowed<'a>(&self, observation: &'a Observation) -> Box<[Option<&'a str>]> {
        self.positions.iter().map(|&position| observation.dimension(position)).collect()
    }
}

#[derive(Default)]
struct Accumulator<'a> {
    subjects: FxHashSet<&'a str>,
    sum: f64,
}

/// Group `observations` by the dimensions of `extractor` and aggregate each group.
///
/// A missing dimension value is a group value of its own; it is neither dropped nor
/// merged into another group. Observations without a subject are not counted and
/// observations without a value add nothing to the sum, but either still opens its
/// group. An empty input yields no groups.
pub fn aggregate<'a, I>(observations: I, extractor: &KeyExtractor) -> FxHashMap<GroupKey, GroupAggregate>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut groups: FxHashMap<Box<[Option<&'a str>]>, Accumulator<'a>> = FxHashMap::default();

    for observation in observations {
        let accumulator = groups.entry(extractor.borrowed(observation)).or_default();
        if let Some(subject) = observation.subject() {
            let _ = accumulator.subjects.insert(subject);
        }
        if let Some(value) = observation.value() {
            accumulator.sum += value;
        }
    }

    groups
        .into_iter()
        .map(|(key, accumulator)| {
            let key: GroupKey = key.iter().map(|value| value.map(CompactString::from)).collect();
            let aggregate = GroupAggregate {
                distinct_subjects: accumulator.subjects.len() as u64,
                sum: accumulator.sum,
            };
            (key, aggregate)
        })
        .collect()
}
