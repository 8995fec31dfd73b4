use crate::entities::{Assignment, BagId, Instance, Item, Solution};
use float_cmp::approx_eq;

pub fn catalog_item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

pub fn assignment_covers_catalog(instance: &Instance, assignment: &Assignment) -> bool {
    assignment.len() == instance.n_items()
}

/// Checks whether `solution` is a complete, feasible assignment that meets the calorie requirement
/// and whether its cached objective values agree with a fresh evaluation.
pub fn solution_is_valid(instance: &Instance, solution: &Solution) -> bool {
    let Solution {
        assignment,
        cost,
        calories,
        time_stamp: _,
    } = solution;

    assignment_covers_catalog(instance, assignment)
        && instance.is_feasible(assignment)
        && instance.calories_met(assignment)
        && approx_eq!(f64, *cost, instance.cost(assignment), ulps = 4)
        && approx_eq!(f64, *calories, instance.calories(assignment), ulps = 4)
}

/// Checks whether the running totals tracked during a search agree with the totals of `assignment`.
pub fn totals_match_assignment(
    instance: &Instance,
    assignment: &Assignment,
    weights: [f64; 2],
    cost: f64,
    calories: f64,
) -> bool {
    let [w_a, w_b] = weights;
    approx_eq!(f64, w_a, instance.bag_weight(assignment, BagId::A), ulps = 4)
        && approx_eq!(f64, w_b, instance.bag_weight(assignment, BagId::B), ulps = 4)
        && approx_eq!(f64, cost, instance.cost(assignment), ulps = 4)
        && approx_eq!(f64, calories, instance.calories(assignment), ulps = 4)
}
