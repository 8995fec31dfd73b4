use std::time::Instant;

use crate::config::{BnBConfig, SearchMode};
use crate::opt::bound::{self, LowerBound};
use crate::opt::incumbent::{Incumbent, SharedIncumbent};
use crate::opt::parallel;
use crate::opt::search::{Node, SearchContext};
use crate::opt::stats::SearchStats;
use log::info;
use thousands::Separable;
use twinsack::entities::{Assignment, BagId, Instance, Solution};
use twinsack::util::assertions;

/// Branch-and-bound optimizer for the two-knapsack allocation problem.
/// Enumerates the ternary tree (leave out, bag A, bag B) of every item in catalog order,
/// pruning infeasible nodes, nodes that cannot beat the incumbent and, when a [`LowerBound`]
/// is configured, nodes whose bound exceeds the incumbent.
pub struct BnBOptimizer {
    pub instance: Instance,
    pub config: BnBConfig,
    bound: Option<Box<dyn LowerBound>>,
    /// Statistics of the last call to [`BnBOptimizer::solve`]
    pub stats: SearchStats,
}

impl BnBOptimizer {
    pub fn new(instance: Instance, config: BnBConfig) -> Self {
        let bound = bound::from_config(config.bound);
        Self {
            instance,
            config,
            bound,
            stats: SearchStats::default(),
        }
    }

    /// Creates an optimizer which prunes with a custom `bound`, regardless of `config.bound`.
    pub fn with_bound(instance: Instance, config: BnBConfig, bound: Box<dyn LowerBound>) -> Self {
        Self {
            instance,
            config,
            bound: Some(bound),
            stats: SearchStats::default(),
        }
    }

    /// Searches for a minimum cost assignment which respects both capacities and meets the
    /// calorie requirement. Returns `None` if no such assignment exists.
    /// Every call starts from scratch: an empty incumbent and zeroed statistics.
    pub fn solve(&mut self) -> Option<Solution> {
        let start = Instant::now();
        let n_items = self.instance.n_items();

        info!(
            "[BnB] solving {:?}: {} items, capacities [{}, {}], at least {} calories",
            self.instance.name,
            n_items,
            self.instance.capacity(BagId::A),
            self.instance.capacity(BagId::B),
            self.instance.min_calories
        );

        let ctx = SearchContext {
            instance: &self.instance,
            bound: self.bound.as_deref(),
            bound_tolerance: self.config.bound_tolerance,
        };

        let (best, stats) = match self.config.search {
            SearchMode::Sequential => {
                let mut incumbent = Incumbent::new();
                let mut labels = Assignment::unassigned(n_items);
                let mut stats = SearchStats::default();
                ctx.explore(Node::root(), &mut labels, &mut incumbent, &mut stats);
                (incumbent.into_best(), stats)
            }
            SearchMode::Parallel { split_depth } => {
                let shared = SharedIncumbent::new();
                let labels = Assignment::unassigned(n_items);
                let stats = parallel::explore(&ctx, Node::root(), &labels, &shared, split_depth);
                (shared.into_inner().into_best(), stats)
            }
        };
        self.stats = stats;

        let solution = best.map(|assignment| Solution::new(&self.instance, assignment));

        info!(
            "[BnB] search finished in {:.3}ms ({} nodes, {} incumbent updates)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.stats.nodes.separate_with_commas(),
            self.stats.incumbent_updates
        );
        info!(
            "[BnB] pruned: {} infeasible, {} dominated, {} by bound ({} bounds unavailable)",
            self.stats.pruned_infeasible.separate_with_commas(),
            self.stats.pruned_dominated.separate_with_commas(),
            self.stats.pruned_by_bound.separate_with_commas(),
            self.stats.bound_failures.separate_with_commas()
        );

        match &solution {
            Some(sol) => {
                assert!(assertions::solution_is_valid(&self.instance, sol));
                info!(
                    "[BnB] optimal cost {} with {} calories",
                    sol.cost, sol.calories
                );
            }
            None => info!("[BnB] no feasible solution exists"),
        }

        solution
    }
}
