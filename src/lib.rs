pub mod cli;
pub mod component;
pub mod compose;
pub mod document;
pub mod error;
pub mod node;
pub mod report;
pub mod schema;
pub mod slots;

pub use component::component_model::{Component, ComponentId};
pub use compose::composed::{SlotProps, SlottedComponent};
pub use error::{ConfigurationError, LoadError};
pub use node::node_model::{Children, Element, Fragment, Node, NodeKind};
pub use schema::identity::slot_components;
pub use schema::schema_model::{SlotSchema, SlotSpec};
pub use slots::classifier::classify;
pub use slots::slots_model::{Classification, SlotValue};
