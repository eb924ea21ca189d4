use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::component::component_model::ComponentId;
use crate::component::registry::ComponentRegistry;
use crate::error::ConfigurationError;
use crate::schema::schema_model::{SlotSchema, SlotSpec};

/// Untyped schema entry as written in a document.
///
/// ```yaml
/// header: Header          # single
/// items: [Item]           # repeatable
/// icons: { Icon: Icon }   # namespaced
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSlotSpec {
    Single(String),
    Repeatable(Vec<String>),
    Namespaced(BTreeMap<String, String>),
}

impl RawSlotSpec {
    fn resolve(
        &self,
        slot: &str,
        registry: &ComponentRegistry,
    ) -> Result<SlotSpec, ConfigurationError> {
        let lookup = |name: &str| {
            registry
                .lookup(name)
                .ok_or_else(|| ConfigurationError::UnknownComponent {
                    name: name.to_string(),
                    slot: slot.to_string(),
                })
        };

        match self {
            RawSlotSpec::Single(name) => Ok(SlotSpec::Single(lookup(name.as_str())?)),
            RawSlotSpec::Repeatable(names) => match names.as_slice() {
                [name] => Ok(SlotSpec::Repeatable(lookup(name.as_str())?)),
                _ => Err(ConfigurationError::RepeatableArity {
                    slot: slot.to_string(),
                    len: names.len(),
                }),
            },
            RawSlotSpec::Namespaced(map) => {
                let mut entries = map.iter();
                match (entries.next(), entries.next()) {
                    (Some((label, name)), None) => Ok(SlotSpec::Namespaced {
                        label: label.clone(),
                        component: lookup(name.as_str())?,
                    }),
                    _ => Err(ConfigurationError::NamespaceArity {
                        slot: slot.to_string(),
                        keys: map.keys().cloned().collect(),
                    }),
                }
            }
        }
    }
}

/// Turn document schema entries into a validated `SlotSchema`.
pub fn resolve_schema(
    raw: &BTreeMap<String, RawSlotSpec>,
    registry: &ComponentRegistry,
) -> Result<SlotSchema, ConfigurationError> {
    let mut builder = SlotSchema::builder();
    for (slot, entry) in raw {
        builder = builder.slot(slot.clone(), entry.resolve(slot, registry)?);
    }
    builder.build_named(&|id: ComponentId| registry.display(id))
}
