use super::MetricCategory;
use compact_str::CompactString;

/// The value of one dimension for one observation; `None` is the missing marker.
pub type DimensionValue = Option<CompactString>;

/// A single tagged numeric observation.
///
/// Dimension values are stored positionally, aligned with the dimension names
/// of the [`RecordStore`](super::RecordStore) that owns the observation. A blank
/// subject or value is kept as `None`: the observation still belongs to its group,
/// but is not counted as a subject or does not add to the sum respectively.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    dimensions: Box<[DimensionValue]>,
    category: MetricCategory,
    subject: Option<CompactString>,
    value: Option<f64>,
}

impl Observation {
    pub(super) const fn new(
        dimensions: Box<[DimensionValue]>,
        category: MetricCategory,
        subject: Option<CompactString>,
        value: Option<f64>,
    ) -> Self {
        Self {
            dimensions,
            category,
            subject,
            value,
        }
    }

    /// The value at `position` in the owning store's dimension list.
    #[must_use]
    pub fn dimension(&self, position: usize) -> Option<&str> {
        self.dimensions.get(position).and_then(|value| value.as_deref())
    }

    #[must_use]
    pub fn dimensions(&self) -> &[DimensionValue] {
        &self.dimensions
    }

    #[must_use]
    pub const fn category(&self) -> MetricCategory {
        self.category
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }
}
