pub mod document_model;
pub mod loader;
