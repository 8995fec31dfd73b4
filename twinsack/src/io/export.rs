use crate::entities::{BagId, Instance, Solution};
use crate::io::ext_repr::{ExtPackedBag, ExtSolution};
use itertools::Itertools;
use std::time::Instant;

/// Exports the outcome of a solve out of the library.
/// `None` is exported as an infeasible outcome, timed at the moment of export.
pub fn export(instance: &Instance, solution: Option<&Solution>, epoch: Instant) -> ExtSolution {
    let export_bag = |bag: BagId| {
        let name = instance.bag(bag).name.clone();
        match solution {
            Some(sol) => ExtPackedBag {
                name,
                items: sol.items_in(instance, bag).map(|i| i.name.clone()).collect_vec(),
                weight: sol.weight(instance, bag),
                calories: instance.bag_calories(&sol.assignment, bag),
            },
            None => ExtPackedBag {
                name,
                items: vec![],
                weight: 0.0,
                calories: 0.0,
            },
        }
    };

    ExtSolution {
        feasible: solution.is_some(),
        total_cost: solution.map(|s| s.cost),
        total_calories: solution.map(|s| s.calories),
        bags: [export_bag(BagId::A), export_bag(BagId::B)],
        run_time_ms: solution
            .map(|s| s.time_stamp.saturating_duration_since(epoch))
            .unwrap_or_else(|| epoch.elapsed())
            .as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;
    use crate::entities::{Assignment, Catalog, Label};

    #[test]
    fn export_lists_items_per_bag() {
        let catalog = Catalog::from_columns(
            &["Canned Beans", "Rice", "Pasta"],
            &[6.0, 4.0, 5.0],
            &[800.0, 1100.0, 1200.0],
            &[7.0, 8.0, 9.0],
        )
        .unwrap();
        let instance = Instance::from_parameters(catalog, 10.0, 8.0, 3000.0);
        let epoch = Instant::now();
        let assignment = Assignment::from_labels(vec![
            Label::In(BagId::A),
            Label::In(BagId::A),
            Label::In(BagId::B),
        ]);
        let solution = Solution::new(&instance, assignment);

        let ext = export(&instance, Some(&solution), epoch);
        assert!(ext.feasible);
        assert_eq!(ext.total_cost, Some(24.0));
        assert_eq!(ext.total_calories, Some(3100.0));
        assert_eq!(ext.bags[0].items, vec!["Canned Beans", "Rice"]);
        assert_eq!(ext.bags[0].weight, 10.0);
        assert_eq!(ext.bags[1].items, vec!["Pasta"]);
        assert_eq!(ext.bags[1].calories, 1200.0);
    }

    #[test]
    fn export_infeasible_outcome() {
        let catalog = Catalog::from_columns(&["Rice"], &[4.0], &[1100.0], &[8.0]).unwrap();
        let instance = Instance::from_parameters(catalog, 0.0, 0.0, 1.0);

        let epoch = Instant::now();
        thread::sleep(Duration::from_millis(5));

        let ext = export(&instance, None, epoch);
        assert!(!ext.feasible);
        assert_eq!(ext.total_cost, None);
        assert!(ext.bags.iter().all(|b| b.items.is_empty()));
        assert!(ext.run_time_ms >= 5);
    }
}
