use std::collections::HashMap;

use crate::component::component_model::{Component, ComponentId};
use crate::error::LoadError;

/// Name table used by document loading to turn component names into
/// identities. Classification never looks at it.
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    by_name: HashMap<String, Component>,
    by_id: HashMap<ComponentId, String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new component. Names must be unique within one registry.
    pub fn declare(&mut self, name: &str) -> Result<ComponentId, LoadError> {
        if self.by_name.contains_key(name) {
            return Err(LoadError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }

        let component = Component::new(name);
        let id = component.id();
        self.by_id.insert(id, name.to_string());
        self.by_name.insert(name.to_string(), component);
        Ok(id)
    }

    pub fn lookup(&self, name: &str) -> Option<ComponentId> {
        self.by_name.get(name).map(Component::id)
    }

    pub fn name_of(&self, id: ComponentId) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    /// Display name for reports; falls back to the raw handle.
    pub fn display(&self, id: ComponentId) -> String {
        self.name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
