use crate::entities::BagId;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Decision taken for a single item.
/// Being a single tri-state value per item, an item can never be in both bags at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Label {
    #[default]
    Unassigned,
    In(BagId),
}

impl Label {
    /// The order in which the branch-and-bound tree expands the children of a node.
    pub const BRANCH_ORDER: [Label; 3] = [Label::Unassigned, Label::In(BagId::A), Label::In(BagId::B)];

    pub fn is_selected(self) -> bool {
        matches!(self, Label::In(_))
    }
}

/// Labels of all items in the catalog, indexed by item id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Assignment(Vec<Label>);

impl Assignment {
    /// Assignment with every item left out of both bags.
    pub fn unassigned(n_items: usize) -> Self {
        Assignment(vec![Label::Unassigned; n_items])
    }

    pub fn from_labels(labels: Vec<Label>) -> Self {
        Assignment(labels)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn set(&mut self, item_id: usize, label: Label) {
        self.0[item_id] = label;
    }

    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    /// Ids of the items assigned to `bag`, in catalog order.
    pub fn items_in(&self, bag: BagId) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |(_, l)| **l == Label::In(bag))
            .map(|(id, _)| id)
    }

    /// Ids of the items assigned to either bag, in catalog order.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_selected())
            .map(|(id, _)| id)
    }

    /// Membership vector of `bag`: `true` at every item id assigned to it.
    pub fn membership(&self, bag: BagId) -> Vec<bool> {
        self.0.iter().map(|l| *l == Label::In(bag)).collect()
    }
}

impl Index<usize> for Assignment {
    type Output = Label;

    fn index(&self, item_id: usize) -> &Label {
        &self.0[item_id]
    }
}
