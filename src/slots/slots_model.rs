use std::collections::BTreeMap;

use crate::node::node_model::Node;

#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    One(Node),
    Many(Vec<Node>),
}

impl SlotValue {
    pub fn as_one(&self) -> Option<&Node> {
        match self {
            SlotValue::One(node) => Some(node),
            SlotValue::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[Node]> {
        match self {
            SlotValue::One(_) => None,
            SlotValue::Many(nodes) => Some(nodes.as_slice()),
        }
    }

    /// Number of nodes held: 1 for a single slot, the list length otherwise.
    pub fn node_count(&self) -> usize {
        match self {
            SlotValue::One(_) => 1,
            SlotValue::Many(nodes) => nodes.len(),
        }
    }
}

/// Children sorted into slots plus the ordered leftovers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    pub slots: BTreeMap<String, SlotValue>,
    pub children: Vec<Node>,
}

impl Classification {
    pub fn slot(&self, name: &str) -> Option<&SlotValue> {
        self.slots.get(name)
    }

    pub fn one(&self, name: &str) -> Option<&Node> {
        self.slots.get(name).and_then(SlotValue::as_one)
    }

    pub fn many(&self, name: &str) -> Option<&[Node]> {
        self.slots.get(name).and_then(SlotValue::as_many)
    }

    /// Nodes held across all slots and leftovers.
    pub fn node_count(&self) -> usize {
        self.children.len() + self.slots.values().map(SlotValue::node_count).sum::<usize>()
    }
}
