use crate::config::BoundConfig;
use log::trace;
use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};
use twinsack::entities::{BagId, Item};

/// What is left of the constraints after the decided prefix of the items has been committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    /// Remaining capacity of each bag, indexed by [`BagId::index`]
    pub capacities: [f64; 2],
    /// Calories still needed to meet the requirement. Zero or negative once it is met.
    pub calorie_deficit: f64,
}

impl Residual {
    pub fn capacity(&self, bag: BagId) -> f64 {
        self.capacities[bag.index()]
    }
}

/// Strategy to compute a lower bound on the additional cost any completion of a partial assignment incurs.
pub trait LowerBound: Send + Sync {
    /// Lower bound on the cost of packing a subset of `suffix` (the undecided items) within `residual`.
    /// Returns `None` when no bound could be derived, in which case the node cannot be pruned.
    fn bound(&self, suffix: &[Item], residual: &Residual) -> Option<f64>;
}

/// Bound of zero everywhere. Sound, but never tighter than the incumbent check.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrivialBound;

impl LowerBound for TrivialBound {
    fn bound(&self, _suffix: &[Item], _residual: &Residual) -> Option<f64> {
        Some(0.0)
    }
}

/// Continuous relaxation of the remaining subproblem:
///
/// minimize Σ cost_i·(x_i + y_i)
/// subject to Σ w_i·x_i ≤ residual capacity A,
///            Σ w_i·y_i ≤ residual capacity B,
///            Σ -cal_i·(x_i + y_i) ≤ -calorie deficit,
///            x_i + y_i ≤ 1,
///            0 ≤ x_i, y_i ≤ 1
///
/// Its feasible region contains every integral completion, so its optimum never exceeds the cost of one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LpRelaxation;

impl LowerBound for LpRelaxation {
    fn bound(&self, suffix: &[Item], residual: &Residual) -> Option<f64> {
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<[Variable; 2]> = suffix
            .iter()
            .map(|item| {
                [
                    problem.add_var(item.cost, (0.0, 1.0)),
                    problem.add_var(item.cost, (0.0, 1.0)),
                ]
            })
            .collect();

        for bag in BagId::ALL {
            let weight_terms = vars
                .iter()
                .zip(suffix)
                .map(|(v, item)| (v[bag.index()], item.weight));
            add_le_row(&mut problem, weight_terms, residual.capacity(bag)).ok()?;
        }

        let calorie_terms = vars
            .iter()
            .zip(suffix)
            .flat_map(|(v, item)| (*v).map(|var| (var, -item.calories)));
        add_le_row(&mut problem, calorie_terms, -residual.calorie_deficit).ok()?;

        for [x, y] in &vars {
            problem.add_constraint([(*x, 1.0), (*y, 1.0)], ComparisonOp::Le, 1.0);
        }

        match problem.solve() {
            Ok(solution) => Some(solution.objective()),
            Err(err) => {
                trace!("[BnB] relaxation over {} items yields no bound: {err}", suffix.len());
                None
            }
        }
    }
}

/// Adds `Σ terms ≤ rhs`, leaving out zero coefficients.
/// A row without any nonzero coefficient is not added, but reported as infeasible when `rhs < 0`.
fn add_le_row(
    problem: &mut Problem,
    terms: impl Iterator<Item = (Variable, f64)>,
    rhs: f64,
) -> Result<(), EmptyRowInfeasible> {
    let terms: Vec<(Variable, f64)> = terms.filter(|(_, coeff)| *coeff != 0.0).collect();
    match (terms.is_empty(), rhs < 0.0) {
        (true, true) => Err(EmptyRowInfeasible),
        (true, false) => Ok(()),
        (false, _) => {
            problem.add_constraint(terms, ComparisonOp::Le, rhs);
            Ok(())
        }
    }
}

#[derive(Debug)]
struct EmptyRowInfeasible;

/// Instantiates the bound described by `config`, if any.
pub fn from_config(config: BoundConfig) -> Option<Box<dyn LowerBound>> {
    match config {
        BoundConfig::None => None,
        BoundConfig::Trivial => Some(Box::new(TrivialBound)),
        BoundConfig::LinearRelaxation => Some(Box::new(LpRelaxation)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new(0, "Rice", 4.0, 1100.0, 8.0),
            Item::new(1, "Pasta", 5.0, 1200.0, 9.0),
            Item::new(2, "Jerky", 2.0, 500.0, 6.0),
        ]
    }

    #[test]
    fn relaxation_without_deficit_costs_nothing() {
        let residual = Residual {
            capacities: [10.0, 8.0],
            calorie_deficit: 0.0,
        };
        let bound = LpRelaxation.bound(&items(), &residual).unwrap();
        assert!(bound.abs() < 1e-9);
    }

    #[test]
    fn relaxation_buys_cheapest_calories_fractionally() {
        // Rice has the best cost per calorie (8/1100), then Pasta (9/1200).
        // Covering 1700 calories: all of Rice and half of Pasta.
        let residual = Residual {
            capacities: [10.0, 8.0],
            calorie_deficit: 1700.0,
        };
        let bound = LpRelaxation.bound(&items(), &residual).unwrap();
        assert!((bound - 12.5).abs() < 1e-6, "bound was {bound}");
    }

    #[test]
    fn relaxation_reports_unreachable_deficit() {
        let residual = Residual {
            capacities: [10.0, 8.0],
            calorie_deficit: 5000.0,
        };
        assert_eq!(LpRelaxation.bound(&items(), &residual), None);
    }

    #[test]
    fn trivial_bound_is_zero() {
        let residual = Residual {
            capacities: [0.0, 0.0],
            calorie_deficit: 1.0,
        };
        assert_eq!(TrivialBound.bound(&items(), &residual), Some(0.0));
    }
}
