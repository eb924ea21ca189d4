use std::collections::{BTreeMap, HashMap};

use crate::component::component_model::ComponentId;
use crate::schema::schema_model::{SlotSchema, SlotSpec};
use crate::slots::slots_model::SlotValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMode {
    Single,
    Repeatable,
    Namespaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTarget<'s> {
    pub slot: &'s str,
    pub mode: SlotMode,
}

/// Call-scoped map from component identity to the slot it fills.
#[derive(Debug)]
pub struct IdentityLookup<'s> {
    targets: HashMap<ComponentId, SlotTarget<'s>>,
    repeatable: Vec<&'s str>,
}

impl<'s> IdentityLookup<'s> {
    pub fn from_schema(schema: &'s SlotSchema) -> Self {
        let mut targets = HashMap::with_capacity(schema.len());
        let mut repeatable = Vec::new();

        for (slot, spec) in schema.iter() {
            let mode = match spec {
                SlotSpec::Single(_) => SlotMode::Single,
                SlotSpec::Repeatable(_) => {
                    repeatable.push(slot);
                    SlotMode::Repeatable
                }
                SlotSpec::Namespaced { .. } => SlotMode::Namespaced,
            };
            targets.insert(spec.component(), SlotTarget { slot, mode });
        }

        Self {
            targets,
            repeatable,
        }
    }

    pub fn target(&self, component: ComponentId) -> Option<&SlotTarget<'s>> {
        self.targets.get(&component)
    }

    /// Result slots before any child is seen: every repeatable slot
    /// starts as an empty list, everything else is absent.
    pub fn seed(&self) -> BTreeMap<String, SlotValue> {
        self.repeatable
            .iter()
            .map(|slot| (slot.to_string(), SlotValue::Many(Vec::new())))
            .collect()
    }
}

/// Identity a caller should give a child meant for each slot.
pub fn slot_components(schema: &SlotSchema) -> BTreeMap<String, ComponentId> {
    schema
        .iter()
        .map(|(slot, spec)| (slot.to_string(), spec.component()))
        .collect()
}
