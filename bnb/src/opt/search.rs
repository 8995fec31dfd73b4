use crate::opt::bound::{LowerBound, Residual};
use crate::opt::incumbent::IncumbentRecord;
use crate::opt::stats::SearchStats;
use log::{debug, trace};
use twinsack::entities::{Assignment, BagId, Instance, Item, Label};
use twinsack::util::assertions;

/// Weight per bag, cost and calories of the decided prefix of a node.
/// Items are always added in catalog order, so the sums are bit-identical to
/// evaluating the node's assignment from scratch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub weights: [f64; 2],
    pub cost: f64,
    pub calories: f64,
}

impl Totals {
    pub fn with(self, item: &Item, label: Label) -> Totals {
        match label {
            Label::Unassigned => self,
            Label::In(bag) => {
                let mut totals = self;
                totals.weights[bag.index()] += item.weight;
                totals.cost += item.cost;
                totals.calories += item.calories;
                totals
            }
        }
    }
}

/// Node of the ternary search tree: items `< level` are decided, the others are not.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub level: usize,
    pub totals: Totals,
}

impl Node {
    pub fn root() -> Self {
        Node {
            level: 0,
            totals: Totals::default(),
        }
    }

    pub fn child(&self, item: &Item, label: Label) -> Self {
        debug_assert_eq!(item.id, self.level);
        Node {
            level: self.level + 1,
            totals: self.totals.with(item, label),
        }
    }
}

/// Outcome of visiting a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// The subtree cannot contain a solution better than the incumbent
    Pruned,
    /// All items are decided
    Leaf,
    /// The children of the node have to be explored
    Branch,
}

/// Everything the recursion reads but never modifies.
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub instance: &'a Instance,
    pub bound: Option<&'a dyn LowerBound>,
    pub bound_tolerance: f64,
}

impl SearchContext<'_> {
    /// Evaluates `node` (whose decisions are in `labels`): prunes it, records it as the new incumbent
    /// when it qualifies, and decides whether its children need to be explored.
    pub fn visit<R: IncumbentRecord>(
        &self,
        node: &Node,
        labels: &Assignment,
        record: &mut R,
        stats: &mut SearchStats,
    ) -> Visit {
        let instance = self.instance;
        let Totals {
            weights,
            cost,
            calories,
        } = node.totals;

        stats.nodes += 1;
        debug_assert!(assertions::totals_match_assignment(
            instance, labels, weights, cost, calories
        ));

        let within_capacity = BagId::ALL
            .iter()
            .all(|&bag| weights[bag.index()] <= instance.capacity(bag));
        if !within_capacity {
            stats.pruned_infeasible += 1;
            return Visit::Pruned;
        }
        // costs only grow deeper in the tree
        if cost >= record.best_cost() {
            stats.pruned_dominated += 1;
            return Visit::Pruned;
        }

        // recording does not stop the branching below
        if calories >= instance.min_calories && record.offer(labels, cost) {
            stats.incumbent_updates += 1;
            debug!("[BnB] new incumbent with cost {cost} at level {}", node.level);
        }

        if node.level == instance.n_items() {
            return Visit::Leaf;
        }

        let best_cost = record.best_cost();
        // without an incumbent there is nothing to compare the bound against
        if let Some(bound) = self.bound.filter(|_| best_cost.is_finite()) {
            let residual = Residual {
                capacities: BagId::ALL.map(|bag| instance.capacity(bag) - weights[bag.index()]),
                calorie_deficit: instance.min_calories - calories,
            };
            match bound.bound(&instance.items()[node.level..], &residual) {
                Some(lb) => {
                    trace!("[BnB] level {}: cost {cost} + bound {lb} vs incumbent {best_cost}", node.level);
                    let slack = self.bound_tolerance * best_cost.abs().max(1.0);
                    if cost + lb > best_cost + slack {
                        stats.pruned_by_bound += 1;
                        return Visit::Pruned;
                    }
                }
                None => stats.bound_failures += 1,
            }
        }

        Visit::Branch
    }

    /// Depth-first exploration of the subtree rooted at `node`.
    /// `labels` is borrowed exclusively: every branch overwrites the label of `node.level` before
    /// descending, and the label is reset once all branches are done, so siblings never see each
    /// other's decisions.
    pub fn explore<R: IncumbentRecord>(
        &self,
        node: Node,
        labels: &mut Assignment,
        record: &mut R,
        stats: &mut SearchStats,
    ) {
        if self.visit(&node, labels, record, stats) == Visit::Branch {
            let item = self.instance.item(node.level);
            for label in Label::BRANCH_ORDER {
                labels.set(node.level, label);
                self.explore(node.child(item, label), labels, record, stats);
            }
            labels.set(node.level, Label::Unassigned);
        }
        debug_assert!(
            labels.labels()[node.level..]
                .iter()
                .all(|l| *l == Label::Unassigned)
        );
    }
}
