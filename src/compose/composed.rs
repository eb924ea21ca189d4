use std::collections::BTreeMap;

use crate::component::component_model::{Component, ComponentId};
use crate::node::node_model::{Children, Node};
use crate::schema::identity::slot_components;
use crate::schema::schema_model::SlotSchema;
use crate::slots::classifier::classify;
use crate::slots::slots_model::SlotValue;

/// Props handed to a slotted parent on each render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotProps {
    pub slots: BTreeMap<String, SlotValue>,
    pub children: Vec<Node>,
}

/// A parent component paired with a fixed slot schema.
///
/// The slot identities are computed once, at construction, and kept as a
/// side table next to the component rather than on it.
#[derive(Debug, Clone)]
pub struct SlottedComponent {
    component: Component,
    schema: SlotSchema,
    slot_ids: BTreeMap<String, ComponentId>,
}

impl SlottedComponent {
    pub fn new(component: Component, schema: SlotSchema) -> Self {
        let slot_ids = slot_components(&schema);
        Self {
            component,
            schema,
            slot_ids,
        }
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Identity to give a child meant for `slot`.
    pub fn slot(&self, slot: &str) -> Option<ComponentId> {
        self.slot_ids.get(slot).copied()
    }

    pub fn slots(&self) -> &BTreeMap<String, ComponentId> {
        &self.slot_ids
    }

    /// Run one classification over the incoming children.
    pub fn props(&self, children: impl Into<Children>) -> SlotProps {
        let classification = classify(children, &self.schema);
        SlotProps {
            slots: classification.slots,
            children: classification.children,
        }
    }
}
