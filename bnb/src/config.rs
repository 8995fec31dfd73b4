use serde::{Deserialize, Serialize};

/// Configuration for the branch-and-bound optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BnBConfig {
    /// Lower bound used to prune nodes on top of the feasibility and incumbent checks
    #[serde(default)]
    pub bound: BoundConfig,
    /// Sequential or parallel exploration of the search tree
    #[serde(default)]
    pub search: SearchMode,
    /// Relative tolerance on the incumbent cost below which a lower bound is not trusted to prune
    #[serde(default = "default_bound_tolerance")]
    pub bound_tolerance: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoundConfig {
    /// Only prune on infeasibility and on the incumbent cost
    None,
    /// A bound of zero for every node: never prunes anything on its own
    Trivial,
    /// Continuous relaxation of the remaining subproblem, solved as a linear program
    #[default]
    LinearRelaxation,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchMode {
    /// Single-threaded depth-first search. Ties between equally cheap solutions are broken by branch order.
    #[default]
    Sequential,
    /// The three branches of every node above `split_depth` are explored in parallel.
    /// Returns an optimal solution, but not necessarily the one the sequential search would report.
    Parallel { split_depth: usize },
}

fn default_bound_tolerance() -> f64 {
    1e-9
}

impl Default for BnBConfig {
    fn default() -> Self {
        Self {
            bound: BoundConfig::default(),
            search: SearchMode::default(),
            bound_tolerance: default_bound_tolerance(),
        }
    }
}
