use crate::opt::incumbent::SharedIncumbent;
use crate::opt::search::{Node, SearchContext, Visit};
use crate::opt::stats::SearchStats;
use rayon::prelude::*;
use twinsack::entities::{Assignment, Label};

/// Explores the subtree rooted at `node`, forking the three branches of every node above
/// `split_depth` onto the rayon thread pool. Below `split_depth` each task continues with
/// the sequential search on its own copy of the labels.
pub fn explore(
    ctx: &SearchContext<'_>,
    node: Node,
    labels: &Assignment,
    shared: &SharedIncumbent,
    split_depth: usize,
) -> SearchStats {
    let mut stats = SearchStats::default();
    let mut record = shared;

    if node.level >= split_depth {
        let mut labels = labels.clone();
        ctx.explore(node, &mut labels, &mut record, &mut stats);
        return stats;
    }

    if ctx.visit(&node, labels, &mut record, &mut stats) == Visit::Branch {
        let item = ctx.instance.item(node.level);
        stats += Label::BRANCH_ORDER
            .par_iter()
            .map(|&label| {
                let mut child_labels = labels.clone();
                child_labels.set(node.level, label);
                explore(ctx, node.child(item, label), &child_labels, shared, split_depth)
            })
            .reduce(SearchStats::default, |mut acc, s| {
                acc += s;
                acc
            });
    }
    stats
}
