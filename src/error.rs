use std::path::PathBuf;
use thiserror::Error;

/// Rejected schema shapes. Raised once, when a `SlotSchema` is built,
/// never during classification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Namespaced entry whose mapping does not hold exactly one key
    #[error("slot '{slot}': namespaced entry must have exactly one key, found {keys:?}")]
    NamespaceArity { slot: String, keys: Vec<String> },

    /// Repeatable entry whose list does not hold exactly one component
    #[error("slot '{slot}': repeatable entry must list exactly one component, found {len}")]
    RepeatableArity { slot: String, len: usize },

    /// Same slot name declared twice
    #[error("slot '{slot}' is declared more than once")]
    DuplicateSlot { slot: String },

    /// Two slots keyed on the same component identity
    #[error("component '{component}' is claimed by both slot '{first}' and slot '{second}'")]
    DuplicateComponent {
        component: String,
        first: String,
        second: String,
    },

    /// Schema names a component that was never declared
    #[error("slot '{slot}' refers to unknown component '{name}'")]
    UnknownComponent { name: String, slot: String },
}

/// Failures while reading a slotting document from disk or text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Child tree references a component missing from `components`
    #[error("node refers to undeclared component '{name}'")]
    UnknownComponent { name: String },

    #[error("component '{name}' is declared more than once")]
    DuplicateDeclaration { name: String },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
