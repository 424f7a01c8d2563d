use super::{AggregateRow, GroupAggregate, GroupKey};
use rustc_hash::FxHashMap;

/// Log target for metric merging
const LOG_TARGET: &str = "     merge";

/// Left-outer merge of the reach and engagement aggregates of one grouping.
///
/// Every reach group yields exactly one row. Engagement figures are attached when a
/// group with equal values (missing matching missing) exists in `engagement`, and are
/// zero otherwise. Engagement groups without a reach counterpart are dropped.
pub fn merge(reach: FxHashMap<GroupKey, GroupAggregate>, engagement: &FxHashMap<GroupKey, GroupAggregate>) -> Vec<AggregateRow> {
    let mut matched = 0_usize;

    let rows: Vec<AggregateRow> = reach
        .into_iter()
        .map(|(dimensions, reached)| {
            let engaged = match engagement.get(&dimensions) {
                Some(&found) => {
                    matched += 1;
                    found
                }
                None => GroupAggregate::default(),
            };

            AggregateRow {
                dimensions,
                reach_count: reached.distinct_subjects,
                reach_sum: reached.sum,
                engagement_count: engaged.distinct_subjects,
                engagement_sum: engaged.sum,
            }
        })
        .collect();

    let dropped = engagement.len() - matched;
    if dropped > 0 {
        log::trace!(target: LOG_TARGET, "Dropped {dropped} engagement groups with no reach counterpart");
    }

    rows
}
