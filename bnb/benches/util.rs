use std::path::Path;

use bnb::io;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use twinsack::entities::{Bag, BagId, Catalog, Instance};
use twinsack::io::import;

pub const HIKING_PATH: &str = "../assets/hiking.json";
pub const N_RANDOM_ITEMS: usize = 14;

pub fn hiking_instance() -> Instance {
    let ext_instance = io::read_instance(Path::new(HIKING_PATH)).unwrap();
    import(&ext_instance).unwrap()
}

/// Random instance of `n_items` items whose capacities and calorie requirement are a fraction of
/// the catalog totals, so that neither the constraints nor the objective dominate the search.
pub fn random_instance(n_items: usize, seed: u64) -> Instance {
    let mut rng = SmallRng::seed_from_u64(seed);
    let names = (0..n_items).map(|i| format!("item_{i}")).collect::<Vec<_>>();
    let weights = (0..n_items)
        .map(|_| rng.random_range(1.0..8.0f64))
        .collect::<Vec<_>>();
    let calories = (0..n_items)
        .map(|_| rng.random_range(100.0..1200.0f64))
        .collect::<Vec<_>>();
    let costs = (0..n_items)
        .map(|_| rng.random_range(1.0..12.0f64))
        .collect::<Vec<_>>();

    let total_weight: f64 = weights.iter().sum();
    let total_calories: f64 = calories.iter().sum();
    let catalog = Catalog::from_columns(names.as_slice(), &weights, &calories, &costs).unwrap();
    let bags = [
        Bag::new(BagId::A, "A", 0.3 * total_weight, 0.0),
        Bag::new(BagId::B, "B", 0.2 * total_weight, 0.0),
    ];
    Instance::with_min_calories(format!("random_{seed}"), catalog, bags, 0.4 * total_calories)
}
