//! Global counters of the Boruvka run.

use crate::traits::Aggregate;

/// Aggregates merged by the engine after every superstep.
///
/// `mst_weight` accumulates for the whole run; the three counters are zeroed
/// by the master at the end of every cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MstAggregates {
    /// Sum of the weights of all accepted hook edges.
    pub mst_weight: f64,
    /// Vertices that are their own representative after compression.
    pub root_count: u64,
    /// Vertices whose pointer moved during compression.
    pub parent_changes: u64,
    /// Accepted hooks in the current cycle.
    pub hook_count: u64,
}

impl MstAggregates {
    /// Zero the per-cycle counters, keeping the accumulated weight.
    pub fn reset_cycle(&mut self) {
        self.root_count = 0;
        self.parent_changes = 0;
        self.hook_count = 0;
    }
}

impl Aggregate for MstAggregates {
    fn merge(&mut self, other: &Self) {
        self.mst_weight += other.mst_weight;
        self.root_count += other.root_count;
        self.parent_changes += other.parent_changes;
        self.hook_count += other.hook_count;
    }
}
