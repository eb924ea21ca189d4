pub mod component_model;
pub mod registry;
