use crate::entities::{Bag, BagId, Catalog, Instance};
use crate::io::ext_repr::{ExtInstance, ExtItem};
use anyhow::Result;
use itertools::Itertools;
use log::warn;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    for ext_item in ext_instance.items.iter().filter(|i| has_negative_attribute(i)) {
        warn!(
            "item {:?} has a negative attribute (weight={}, calories={}, cost={}), accepting it as is",
            ext_item.name, ext_item.weight, ext_item.calories, ext_item.cost
        );
    }

    let (names, weights, calories, costs): (Vec<&str>, Vec<f64>, Vec<f64>, Vec<f64>) = ext_instance
        .items
        .iter()
        .map(|i| (i.name.as_str(), i.weight, i.calories, i.cost))
        .multiunzip();

    let catalog = Catalog::from_columns(names.as_slice(), &weights, &calories, &costs)?;

    let [ext_a, ext_b] = &ext_instance.bags;
    let bags = [
        Bag::new(BagId::A, &ext_a.name, ext_a.capacity, ext_a.calorie_requirement),
        Bag::new(BagId::B, &ext_b.name, ext_b.capacity, ext_b.calorie_requirement),
    ];
    for bag in bags.iter().filter(|b| b.capacity < 0.0) {
        warn!("{} ({}) has a negative capacity: {}", bag.id, bag.name, bag.capacity);
    }

    let instance = match ext_instance.min_calories {
        Some(min_calories) => {
            Instance::with_min_calories(&ext_instance.name, catalog, bags, min_calories)
        }
        None => Instance::new(&ext_instance.name, catalog, bags),
    };

    Ok(instance)
}

fn has_negative_attribute(ext_item: &ExtItem) -> bool {
    ext_item.weight < 0.0 || ext_item.calories < 0.0 || ext_item.cost < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIKING: &str = r#"{
        "name": "hiking",
        "items": [
            {"name": "Granola Bars", "weight": 2, "calories": 300, "cost": 5},
            {"name": "Trail Mix", "weight": 1, "calories": 800, "cost": 10}
        ],
        "bags": [
            {"name": "Ece", "capacity": 10, "calorie_requirement": 2000},
            {"name": "Arda", "capacity": 8, "calorie_requirement": 1500}
        ]
    }"#;

    #[test]
    fn import_sums_calorie_requirements() {
        let ext_instance: ExtInstance = serde_json::from_str(HIKING).unwrap();
        let instance = import(&ext_instance).unwrap();

        assert_eq!(instance.name, "hiking");
        assert_eq!(instance.n_items(), 2);
        assert_eq!(instance.item(1).name, "Trail Mix");
        assert_eq!(instance.capacity(BagId::A), 10.0);
        assert_eq!(instance.capacity(BagId::B), 8.0);
        assert_eq!(instance.bag(BagId::B).name, "Arda");
        assert_eq!(instance.min_calories, 3500.0);
    }

    #[test]
    fn explicit_min_calories_overrides_the_sum() {
        let mut ext_instance: ExtInstance = serde_json::from_str(HIKING).unwrap();
        ext_instance.min_calories = Some(100.0);
        let instance = import(&ext_instance).unwrap();
        assert_eq!(instance.min_calories, 100.0);
    }
}
