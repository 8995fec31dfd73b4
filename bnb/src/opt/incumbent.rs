use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use twinsack::entities::Assignment;

/// Best feasible assignment found so far.
#[derive(Debug, Clone)]
pub struct Incumbent {
    best: Option<Assignment>,
    best_cost: f64,
}

impl Incumbent {
    pub fn new() -> Self {
        Self {
            best: None,
            best_cost: f64::INFINITY,
        }
    }

    pub fn into_best(self) -> Option<Assignment> {
        self.best
    }
}

impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and update access to the incumbent from within the search.
pub trait IncumbentRecord {
    /// Cost of the incumbent, `+inf` while there is none.
    fn best_cost(&self) -> f64;

    /// Replaces the incumbent with `assignment` if `cost` is strictly lower.
    /// Returns whether the incumbent was replaced.
    fn offer(&mut self, assignment: &Assignment, cost: f64) -> bool;
}

impl IncumbentRecord for Incumbent {
    fn best_cost(&self) -> f64 {
        self.best_cost
    }

    fn offer(&mut self, assignment: &Assignment, cost: f64) -> bool {
        if cost < self.best_cost {
            self.best = Some(assignment.clone());
            self.best_cost = cost;
            true
        } else {
            false
        }
    }
}

/// Incumbent shared between the workers of a parallel search.
/// The cost can be read without locking, updates happen under a mutex and re-check the cost,
/// so two workers can never overwrite each other's better solution.
#[derive(Debug)]
pub struct SharedIncumbent {
    best_cost_bits: AtomicU64,
    inner: Mutex<Incumbent>,
}

impl SharedIncumbent {
    pub fn new() -> Self {
        Self {
            best_cost_bits: AtomicU64::new(f64::INFINITY.to_bits()),
            inner: Mutex::new(Incumbent::new()),
        }
    }

    pub fn into_inner(self) -> Incumbent {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedIncumbent {
    fn default() -> Self {
        Self::new()
    }
}

impl IncumbentRecord for &SharedIncumbent {
    fn best_cost(&self) -> f64 {
        f64::from_bits(self.best_cost_bits.load(Ordering::Acquire))
    }

    fn offer(&mut self, assignment: &Assignment, cost: f64) -> bool {
        // cheap rejection against a possibly stale cost, the decisive check happens under the lock
        if cost >= self.best_cost() {
            return false;
        }
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let replaced = inner.offer(assignment, cost);
        if replaced {
            self.best_cost_bits.store(cost.to_bits(), Ordering::Release);
        }
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use twinsack::entities::{BagId, Label};

    #[test]
    fn only_strict_improvements_are_recorded() {
        let mut incumbent = Incumbent::new();
        let first = Assignment::unassigned(2);
        let mut second = Assignment::unassigned(2);
        second.set(0, Label::In(BagId::B));

        assert!(incumbent.offer(&first, 5.0));
        assert!(!incumbent.offer(&second, 5.0));
        assert_eq!(incumbent.best_cost(), 5.0);
        assert_eq!(incumbent.clone().into_best(), Some(first));

        assert!(incumbent.offer(&second, 4.0));
        assert_eq!(incumbent.into_best(), Some(second));
    }

    #[test]
    fn concurrent_offers_keep_the_cheapest() {
        let shared = SharedIncumbent::new();
        (0..1000u32).into_par_iter().for_each(|i| {
            let cost = ((i * 7919) % 1000) as f64;
            let mut record = &shared;
            record.offer(&Assignment::unassigned(1), cost);
        });
        assert_eq!((&shared).best_cost(), 0.0);
        assert!(shared.into_inner().into_best().is_some());
    }
}
