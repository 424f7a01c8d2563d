use super::{DimensionKey, MAX_DIMENSIONS};
use compact_str::CompactString;

/// Every non-empty subset of `dimensions`, each as a canonical [`DimensionKey`].
///
/// Yields `2^N - 1` keys for `N` distinct dimensions. The order is unspecified.
///
/// # Panics
///
/// Panics if more than [`MAX_DIMENSIONS`] dimensions are given.
pub fn enumerate_subsets(dimensions: &[CompactString]) -> impl Iterator<Item = DimensionKey> + '_ {
    let count = dimensions.len();
    assert!(
        count <= MAX_DIMENSIONS,
        "cannot enumerate subsets of {count} dimensions, at most {MAX_DIMENSIONS} are supported"
    );
    (1_usize..(1 << count)).filter_map(move |mask| {
        DimensionKey::new(
            dimensions
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, name)| name),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(list: &[&str]) -> Vec<CompactString> {
        list.iter().map(|&name| CompactString::from(name)).collect()
    }

    #[test]
    fn test_power_set_minus_empty() {
        let dims = names(&["brand", "indication", "vendor"]);
        let keys: HashSet<DimensionKey> = enumerate_subsets(&dims).collect();

        assert_eq!(keys.len(), 7);
        for expected in [
            vec!["brand"],
            vec!["indication"],
            vec!["vendor"],
            vec!["brand", "indication"],
            vec!["brand", "vendor"],
            vec!["indication", "vendor"],
            vec!["brand", "indication", "vendor"],
        ] {
            assert!(keys.contains(&DimensionKey::new(expected.clone()).unwrap()), "missing {expected:?}");
        }
    }

    #[test]
    fn test_keys_are_canonical() {
        let dims = names(&["vendor", "brand"]);
        let keys: Vec<DimensionKey> = enumerate_subsets(&dims).collect();
        assert!(keys.iter().any(|key| key.names() == ["brand", "vendor"]));
    }

    #[test]
    fn test_no_dimensions_yields_nothing() {
        assert_eq!(enumerate_subsets(&[]).count(), 0);
    }

    #[test]
    #[should_panic(expected = "at most 20 are supported")]
    fn test_too_many_dimensions_panics() {
        let dims: Vec<CompactString> = (0..=MAX_DIMENSIONS).map(|i| CompactString::from(format!("d{i}"))).collect();
        let _ = enumerate_subsets(&dims).count();
    }

    #[test]
    fn test_five_dimensions() {
        let dims = names(&["brand", "indication", "vendor", "month", "vehicle"]);
        assert_eq!(enumerate_subsets(&dims).count(), 31);
    }
}
