//! Cube materialization and lookup
//!
//! This module precomputes, for every non-empty combination of a fixed list of
//! dimensions, a table of reach and engagement figures, and serves those tables by
//! an unordered selection of dimension names.
//!
//! # Implementation Model
//!
//! [`CubeBuilder::build`] drives the whole process:
//!
//! 1. [`enumerate_subsets`] yields the `2^N - 1` canonical [`DimensionKey`]s.
//! 2. The store's observations are partitioned once into reach and engagement.
//! 3. For each key, [`aggregate`] groups both partitions by the key's dimensions,
//!    counting distinct subjects and summing values per group.
//! 4. [`merge`] joins the two aggregates, rooted at the reach groups.
//! 5. The merged [`AggregateTable`] is stored in the [`Cube`] under its key.
//!
//! Keys are independent of each other, so step 3-4 runs on the rayon pool unless
//! the builder is told otherwise.
//!
//! Missing dimension values take part in grouping like any other value. Groups with
//! engagement but no reach do not appear in the output; reach groups without
//! engagement carry zero engagement figures.
//!
//! A built [`Cube`] is immutable. [`SharedCube`] publishes a replacement atomically
//! so lookups never observe a partially built cube.

mod aggregate_row;
mod aggregator;
mod builder;
mod cube_error;
mod cube_index;
mod dimension_key;
mod enumerator;
mod merger;
mod shared_cube;

pub use aggregate_row::{
    AggregateRow, AggregateTable, ENGAGEMENT_COUNT_COLUMN, ENGAGEMENT_SUM_COLUMN, METRIC_COLUMNS, REACH_COUNT_COLUMN, REACH_SUM_COLUMN,
};
pub use aggregator::{GroupAggregate, GroupKey, KeyExtractor, aggregate};
pub use builder::{CubeBuilder, MAX_DIMENSIONS};
pub use cube_error::CubeError;
pub use cube_index::Cube;
pub use dimension_key::DimensionKey;
pub use enumerator::enumerate_subsets;
pub use merger::merge;
pub use shared_cube::SharedCube;
