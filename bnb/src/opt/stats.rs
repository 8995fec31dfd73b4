use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Counters collected while exploring the search tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of nodes visited (calls to the recursive step)
    pub nodes: u64,
    /// Nodes where a bag exceeded its capacity
    pub pruned_infeasible: u64,
    /// Nodes whose cost already reached the incumbent cost
    pub pruned_dominated: u64,
    /// Nodes whose lower bound exceeded the incumbent cost
    pub pruned_by_bound: u64,
    /// Nodes where the lower bound strategy could not produce a bound
    pub bound_failures: u64,
    /// Number of times a strictly better solution was recorded
    pub incumbent_updates: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.pruned_infeasible += rhs.pruned_infeasible;
        self.pruned_dominated += rhs.pruned_dominated;
        self.pruned_by_bound += rhs.pruned_by_bound;
        self.bound_failures += rhs.bound_failures;
        self.incumbent_updates += rhs.incumbent_updates;
    }
}
