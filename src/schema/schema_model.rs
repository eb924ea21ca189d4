use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::component::component_model::ComponentId;
use crate::error::ConfigurationError;

/// How a slot collects the elements that match it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSpec {
    /// At most one element; a later match replaces an earlier one.
    Single(ComponentId),
    /// Every match, in input order.
    Repeatable(ComponentId),
    /// Matches are claimed (kept out of the leftovers) but never exposed.
    Namespaced { label: String, component: ComponentId },
}

impl SlotSpec {
    /// The identity a child must carry to land in this slot.
    pub fn component(&self) -> ComponentId {
        match self {
            SlotSpec::Single(id) | SlotSpec::Repeatable(id) => *id,
            SlotSpec::Namespaced { component, .. } => *component,
        }
    }

    pub fn is_repeatable(&self) -> bool {
        matches!(self, SlotSpec::Repeatable(_))
    }
}

/// Validated slot declarations of a parent component.
///
/// Every component identity appears in at most one slot, so the
/// identity lookup derived from a schema is always unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotSchema {
    slots: BTreeMap<String, SlotSpec>,
}

impl SlotSchema {
    pub fn builder() -> SlotSchemaBuilder {
        SlotSchemaBuilder::default()
    }

    pub fn get(&self, slot: &str) -> Option<&SlotSpec> {
        self.slots.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotSpec)> {
        self.slots.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct SlotSchemaBuilder {
    entries: Vec<(String, SlotSpec)>,
}

impl SlotSchemaBuilder {
    pub fn single(self, slot: impl Into<String>, component: impl Into<ComponentId>) -> Self {
        self.slot(slot, SlotSpec::Single(component.into()))
    }

    pub fn repeatable(self, slot: impl Into<String>, component: impl Into<ComponentId>) -> Self {
        self.slot(slot, SlotSpec::Repeatable(component.into()))
    }

    pub fn namespaced(
        self,
        slot: impl Into<String>,
        label: impl Into<String>,
        component: impl Into<ComponentId>,
    ) -> Self {
        self.slot(
            slot,
            SlotSpec::Namespaced {
                label: label.into(),
                component: component.into(),
            },
        )
    }

    pub fn slot(mut self, slot: impl Into<String>, spec: SlotSpec) -> Self {
        self.entries.push((slot.into(), spec));
        self
    }

    pub fn build(self) -> Result<SlotSchema, ConfigurationError> {
        self.build_named(&|id: ComponentId| id.to_string())
    }

    /// Validate, using `name_of` to render component identities in errors.
    pub(crate) fn build_named(
        self,
        name_of: &dyn Fn(ComponentId) -> String,
    ) -> Result<SlotSchema, ConfigurationError> {
        let mut slots = BTreeMap::new();
        let mut claimed: HashMap<ComponentId, String> = HashMap::new();

        for (slot, spec) in self.entries {
            if slots.contains_key(&slot) {
                return Err(ConfigurationError::DuplicateSlot { slot });
            }

            if let Some(first) = claimed.get(&spec.component()) {
                return Err(ConfigurationError::DuplicateComponent {
                    component: name_of(spec.component()),
                    first: first.clone(),
                    second: slot,
                });
            }

            claimed.insert(spec.component(), slot.clone());
            slots.insert(slot, spec);
        }

        log::debug!("built slot schema with {} slots", slots.len());
        Ok(SlotSchema { slots })
    }
}
