use compact_str::CompactString;
use thiserror::Error;

/// Configuration failures detected before any aggregation work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// The dimension list is empty.
    #[error("at least one dimension must be configured")]
    NoDimensions,

    /// The same dimension name was configured more than once.
    #[error("dimension '{0}' is configured more than once")]
    DuplicateDimension(CompactString),

    /// A configured dimension does not exist in the record schema.
    #[error("dimension '{0}' does not exist in the record schema")]
    UnknownDimension(CompactString),

    /// More dimensions than the builder is willing to enumerate subsets for.
    #[error("{count} dimensions configured, at most {max} are supported")]
    TooManyDimensions { count: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_dimension() {
        let err = CubeError::UnknownDimension("vendor".into());
        assert_eq!(err.to_string(), "dimension 'vendor' does not exist in the record schema");
    }

    #[test]
    fn test_display_for_each_kind() {
        assert_eq!(CubeError::NoDimensions.to_string(), "at least one dimension must be configured");
        assert_eq!(
            CubeError::DuplicateDimension("brand".into()).to_string(),
            "dimension 'brand' is configured more than once"
        );
        assert_eq!(
            CubeError::TooManyDimensions { count: 21, max: 20 }.to_string(),
            "21 dimensions configured, at most 20 are supported"
        );
    }

    #[test]
    fn test_converts_into_app_error() {
        fn fails() -> crate::Result<()> {
            Err(CubeError::NoDimensions)?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.to_string().contains("at least one dimension"));
    }
}
