use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::component::registry::ComponentRegistry;
use crate::document::document_model::{RawChildren, RawElement, RawFragment, RawNode};
use crate::node::node_model::{Children, Node};
use crate::slots::slots_model::{Classification, SlotValue};

// ============================================================================
// Classification report: serializable view of a Classification
// ============================================================================

/// A classification with component identities turned back into names.
///
/// Nodes are written in the same shape documents are read in, so a
/// leftover list can be pasted back into a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Number of nodes placed into slots
    pub matched: usize,

    /// Number of leftover children
    pub leftover: usize,

    /// Slot contents, keyed by slot name
    pub slots: BTreeMap<String, SlotReport>,

    /// Children that matched no slot, in input order
    pub children: Vec<RawNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotReport {
    Many(Vec<RawNode>),
    One(RawNode),
}

impl ClassificationReport {
    pub fn from_classification(classification: &Classification, registry: &ComponentRegistry) -> Self {
        let slots = classification
            .slots
            .iter()
            .map(|(name, value)| {
                let report = match value {
                    SlotValue::One(node) => SlotReport::One(to_raw(node, registry)),
                    SlotValue::Many(nodes) => {
                        SlotReport::Many(nodes.iter().map(|n| to_raw(n, registry)).collect())
                    }
                };
                (name.clone(), report)
            })
            .collect();

        let matched = classification
            .slots
            .values()
            .map(SlotValue::node_count)
            .sum();

        Self {
            matched,
            leftover: classification.children.len(),
            slots,
            children: classification
                .children
                .iter()
                .map(|n| to_raw(n, registry))
                .collect(),
        }
    }
}

/// Render a node in document form, naming components via `registry`.
pub fn to_raw(node: &Node, registry: &ComponentRegistry) -> RawNode {
    match node {
        Node::Empty => RawNode::Empty,
        Node::Bool(b) => RawNode::Bool(*b),
        Node::Number(n) => RawNode::Number(*n),
        Node::Text(s) => RawNode::Text(s.clone()),
        Node::Fragment(fragment) => RawNode::Fragment(RawFragment {
            fragment: children_to_raw(&fragment.children, registry)
                .unwrap_or(RawChildren::Many(Vec::new())),
        }),
        Node::Element(el) => RawNode::Element(RawElement {
            component: registry.display(el.component),
            key: el.key.clone(),
            props: el.props.clone(),
            children: children_to_raw(&el.children, registry),
        }),
    }
}

fn children_to_raw(children: &Children, registry: &ComponentRegistry) -> Option<RawChildren> {
    match children {
        Children::Absent => None,
        Children::One(node) => Some(RawChildren::One(Box::new(to_raw(node, registry)))),
        Children::Many(nodes) => Some(RawChildren::Many(
            nodes.iter().map(|n| to_raw(n, registry)).collect(),
        )),
    }
}
