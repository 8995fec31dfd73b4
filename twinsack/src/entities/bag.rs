use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifies one of the two bags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BagId {
    A,
    B,
}

impl BagId {
    pub const ALL: [BagId; 2] = [BagId::A, BagId::B];

    pub fn index(self) -> usize {
        match self {
            BagId::A => 0,
            BagId::B => 1,
        }
    }
}

impl Display for BagId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BagId::A => write!(f, "bag A"),
            BagId::B => write!(f, "bag B"),
        }
    }
}

/// A capacity-constrained container items can be assigned to.
#[derive(Clone, Debug, PartialEq)]
pub struct Bag {
    pub id: BagId,
    /// Name of the bag's carrier, used for reporting only
    pub name: String,
    /// Maximum total weight of the items assigned to this bag
    pub capacity: f64,
    /// Calories this bag's carrier needs. The instance sums these into its combined requirement.
    pub calorie_requirement: f64,
}

impl Bag {
    pub fn new(id: BagId, name: impl Into<String>, capacity: f64, calorie_requirement: f64) -> Bag {
        Bag {
            id,
            name: name.into(),
            capacity,
            calorie_requirement,
        }
    }
}
