use crate::entities::{Assignment, BagId, Instance, Item};
use std::time::Instant;

/// Best feasible assignment found by a solver, with its objective values.
#[derive(Debug, Clone)]
pub struct Solution {
    pub assignment: Assignment,
    /// Total cost of the selected items
    pub cost: f64,
    /// Total calories of the selected items
    pub calories: f64,
    /// Instant the solution was created, after the search that produced it has finished
    pub time_stamp: Instant,
}

impl Solution {
    pub fn new(instance: &Instance, assignment: Assignment) -> Self {
        Self {
            cost: instance.cost(&assignment),
            calories: instance.calories(&assignment),
            assignment,
            time_stamp: Instant::now(),
        }
    }

    /// Items packed in `bag`, in catalog order.
    pub fn items_in<'a>(&'a self, instance: &'a Instance, bag: BagId) -> impl Iterator<Item = &'a Item> {
        self.assignment.items_in(bag).map(|id| instance.item(id))
    }

    pub fn weight(&self, instance: &Instance, bag: BagId) -> f64 {
        instance.bag_weight(&self.assignment, bag)
    }
}
