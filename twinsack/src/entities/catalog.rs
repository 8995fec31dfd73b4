use crate::entities::Item;
use crate::util::assertions;
use anyhow::{Result, ensure};
use itertools::izip;
use std::ops::Index;

/// Ordered collection of all items of an instance.
/// The order is the fixed branching order: item 0 is decided first, item n-1 last.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        assert!(
            assertions::catalog_item_ids_correct(&items),
            "All items should have consecutive IDs starting from 0"
        );
        Self { items }
    }

    /// Builds a catalog out of parallel columns.
    /// Only the lengths are validated, the values are accepted as they are.
    pub fn from_columns(
        names: &[impl AsRef<str>],
        weights: &[f64],
        calories: &[f64],
        costs: &[f64],
    ) -> Result<Self> {
        ensure!(
            names.len() == weights.len()
                && names.len() == calories.len()
                && names.len() == costs.len(),
            "item columns have mismatched lengths: {} names, {} weights, {} calories, {} costs",
            names.len(),
            weights.len(),
            calories.len(),
            costs.len()
        );

        let items = izip!(names, weights, calories, costs)
            .enumerate()
            .map(|(id, (name, &w, &cal, &cost))| {
                let name: &str = name.as_ref();
                Item::new(id, name, w, cal, cost)
            })
            .collect();

        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Index<usize> for Catalog {
    type Output = Item;

    fn index(&self, id: usize) -> &Item {
        &self.items[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_preserve_order() {
        let catalog = Catalog::from_columns(
            &["Rice", "Pasta", "Jerky"],
            &[4.0, 5.0, 2.0],
            &[1100.0, 1200.0, 500.0],
            &[8.0, 9.0, 6.0],
        )
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[1].name, "Pasta");
        assert_eq!(catalog[2].id, 2);
        assert_eq!(catalog[0].calories, 1100.0);
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let result = Catalog::from_columns(&["Rice", "Pasta"], &[4.0], &[1100.0, 1200.0], &[8.0, 9.0]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_values_are_accepted_as_is() {
        let catalog = Catalog::from_columns(&["Odd"], &[-1.0], &[-5.0], &[-2.0]).unwrap();
        assert_eq!(catalog[0].weight, -1.0);
        assert_eq!(catalog[0].cost, -2.0);
    }
}
