use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    pub name: String,
    pub weight: f64,
    pub calories: f64,
    pub cost: f64,
}

/// External representation of a [`Bag`](crate::entities::Bag).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBag {
    /// Name of the bag's carrier
    pub name: String,
    /// Maximum total weight of the items in the bag
    pub capacity: f64,
    /// Calories required by the bag's carrier.
    /// Zero if not specified.
    #[serde(default)]
    pub calorie_requirement: f64,
}

/// External representation of an [`Instance`](crate::entities::Instance).
/// Items are decided in the order they appear in `items`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Set of items which can be packed
    pub items: Vec<ExtItem>,
    /// The two bags
    pub bags: [ExtBag; 2],
    /// Combined calorie requirement.
    /// Sum of the bags' requirements if not specified.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_calories: Option<f64>,
}

/// Contents of a single bag in an [`ExtSolution`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackedBag {
    pub name: String,
    /// Names of the items packed in the bag, in catalog order
    pub items: Vec<String>,
    pub weight: f64,
    pub calories: f64,
}

/// External representation of the outcome of a solve.
/// When no feasible solution exists, `feasible` is false, the totals are absent and both bags are empty.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub feasible: bool,
    pub total_cost: Option<f64>,
    pub total_calories: Option<f64>,
    pub bags: [ExtPackedBag; 2],
    /// Milliseconds between the epoch and the end of the search.
    /// Without a solution, the time of export is used instead.
    pub run_time_ms: u64,
}
