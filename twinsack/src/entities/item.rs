use std::fmt::{Display, Formatter};

/// Item which can be packed into one of the two bags.
/// Immutable once created, owned by the [`Catalog`](crate::entities::Catalog).
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Position of the item in the catalog, which is also its branching order
    pub id: usize,
    pub name: String,
    pub weight: f64,
    pub calories: f64,
    pub cost: f64,
}

impl Item {
    pub fn new(id: usize, name: impl Into<String>, weight: f64, calories: f64, cost: f64) -> Item {
        Item {
            id,
            name: name.into(),
            weight,
            calories,
            cost,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: weight={}, calories={}, cost=${:.2}",
            self.name, self.weight, self.calories, self.cost
        )
    }
}
