use compact_str::CompactString;
use core::fmt::{self, Display, Formatter};

/// Canonical identity of a dimension combination: sorted, deduplicated, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimensionKey(Box<[CompactString]>);

impl DimensionKey {
    /// Canonicalize a selection of dimension names.
    ///
    /// Returns `None` when the selection is empty.
    #[must_use]
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<CompactString> = names.into_iter().map(|name| CompactString::from(name.as_ref())).collect();
        if names.is_empty() {
            return None;
        }

        names.sort_unstable();
        names.dedup();
        Some(Self(names.into_boxed_slice()))
    }

    #[must_use]
    pub fn names(&self) -> &[CompactString] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(CompactString::as_str)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for DimensionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, name) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}
