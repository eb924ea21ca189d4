pub mod identity;
pub mod raw;
pub mod schema_model;
