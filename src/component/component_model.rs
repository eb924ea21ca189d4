use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a component definition.
///
/// Two handles compare equal only if they come from the same
/// `Component::new` call. Names play no part in equality, so two
/// components that share a display name stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    fn fresh() -> Self {
        ComponentId(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A component definition: the thing elements are instances of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    name: String,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::fresh(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&Component> for ComponentId {
    fn from(component: &Component) -> Self {
        component.id
    }
}
