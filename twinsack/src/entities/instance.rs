use crate::entities::{Assignment, Bag, BagId, Catalog, Item};

/// Instance of the two-knapsack allocation problem:
/// a catalog of items, two bags with a weight capacity each, and a combined calorie requirement
/// the selected items have to meet.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub catalog: Catalog,
    /// The two bags, indexed by [`BagId::index`]
    pub bags: [Bag; 2],
    /// Minimum total calories of all items assigned to either bag
    pub min_calories: f64,
}

impl Instance {
    /// Creates an instance whose combined calorie requirement is the sum of the bags' requirements.
    pub fn new(name: impl Into<String>, catalog: Catalog, bags: [Bag; 2]) -> Self {
        let min_calories = total(bags.iter().map(|b| b.calorie_requirement));
        Self::with_min_calories(name, catalog, bags, min_calories)
    }

    pub fn with_min_calories(
        name: impl Into<String>,
        catalog: Catalog,
        bags: [Bag; 2],
        min_calories: f64,
    ) -> Self {
        assert_eq!(bags[0].id, BagId::A);
        assert_eq!(bags[1].id, BagId::B);
        Self {
            name: name.into(),
            catalog,
            bags,
            min_calories,
        }
    }

    /// Shorthand for an anonymous instance built from a catalog and the three problem parameters.
    pub fn from_parameters(catalog: Catalog, capacity_a: f64, capacity_b: f64, min_calories: f64) -> Self {
        let bags = [
            Bag::new(BagId::A, "A", capacity_a, 0.0),
            Bag::new(BagId::B, "B", capacity_b, 0.0),
        ];
        Self::with_min_calories("", catalog, bags, min_calories)
    }

    pub fn items(&self) -> &[Item] {
        self.catalog.items()
    }

    pub fn n_items(&self) -> usize {
        self.catalog.len()
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.catalog[id]
    }

    pub fn bag(&self, id: BagId) -> &Bag {
        &self.bags[id.index()]
    }

    pub fn capacity(&self, id: BagId) -> f64 {
        self.bag(id).capacity
    }

    /// Total weight of the items assigned to `bag`.
    pub fn bag_weight(&self, assignment: &Assignment, bag: BagId) -> f64 {
        total(assignment.items_in(bag).map(|i| self.item(i).weight))
    }

    /// Total calories of the items assigned to `bag`.
    pub fn bag_calories(&self, assignment: &Assignment, bag: BagId) -> f64 {
        total(assignment.items_in(bag).map(|i| self.item(i).calories))
    }

    /// Whether neither bag exceeds its capacity. The calorie requirement is not considered.
    pub fn is_feasible(&self, assignment: &Assignment) -> bool {
        BagId::ALL
            .iter()
            .all(|&bag| self.bag_weight(assignment, bag) <= self.capacity(bag))
    }

    /// Total cost of the items assigned to either bag.
    pub fn cost(&self, assignment: &Assignment) -> f64 {
        total(assignment.selected().map(|i| self.item(i).cost))
    }

    /// Total calories of the items assigned to either bag.
    pub fn calories(&self, assignment: &Assignment) -> f64 {
        total(assignment.selected().map(|i| self.item(i).calories))
    }

    pub fn calories_met(&self, assignment: &Assignment) -> bool {
        self.calories(assignment) >= self.min_calories
    }
}

/// Sum starting from `+0.0`, so that an empty selection totals to positive zero.
fn total(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |acc, v| acc + v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Label;

    fn instance() -> Instance {
        let catalog = Catalog::from_columns(
            &["Granola Bars", "Trail Mix", "Dried Fruit"],
            &[2.0, 1.0, 2.0],
            &[300.0, 800.0, 200.0],
            &[5.0, 10.0, 4.0],
        )
        .unwrap();
        let bags = [
            Bag::new(BagId::A, "Ece", 3.0, 600.0),
            Bag::new(BagId::B, "Arda", 2.0, 400.0),
        ];
        Instance::new("test", catalog, bags)
    }

    #[test]
    fn calorie_requirements_are_combined() {
        assert_eq!(instance().min_calories, 1000.0);
    }

    #[test]
    fn evaluation() {
        let instance = instance();
        let a = Label::In(BagId::A);
        let b = Label::In(BagId::B);

        let assignment = Assignment::from_labels(vec![a, a, b]);
        assert_eq!(instance.bag_weight(&assignment, BagId::A), 3.0);
        assert_eq!(instance.bag_weight(&assignment, BagId::B), 2.0);
        assert!(instance.is_feasible(&assignment));
        assert_eq!(instance.cost(&assignment), 19.0);
        assert_eq!(instance.calories(&assignment), 1300.0);
        assert!(instance.calories_met(&assignment));

        let overloaded = Assignment::from_labels(vec![b, a, b]);
        assert!(!instance.is_feasible(&overloaded));

        let empty = Assignment::unassigned(3);
        assert!(instance.is_feasible(&empty));
        assert_eq!(instance.cost(&empty), 0.0);
        assert!(instance.cost(&empty).is_sign_positive());
        assert!(instance.calories(&empty).is_sign_positive());
        assert!(instance.bag_weight(&empty, BagId::B).is_sign_positive());
        assert!(instance.bag_calories(&empty, BagId::A).is_sign_positive());
        assert!(!instance.calories_met(&empty));
    }
}
