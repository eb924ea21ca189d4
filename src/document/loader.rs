use std::path::Path;

use crate::component::registry::ComponentRegistry;
use crate::document::document_model::{Document, RawDocument, resolve_optional};
use crate::error::LoadError;
use crate::schema::raw::resolve_schema;
use crate::schema::schema_model::SlotSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are read as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

pub fn parse_raw(text: &str, format: DocumentFormat) -> Result<RawDocument, LoadError> {
    Ok(match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        DocumentFormat::Json => serde_json::from_str(text)?,
    })
}

/// Declare components and validate the schema. The child tree is not read.
pub fn resolve_schema_only(raw: &RawDocument) -> Result<(ComponentRegistry, SlotSchema), LoadError> {
    let mut registry = ComponentRegistry::new();
    for name in &raw.components {
        registry.declare(name)?;
    }

    let schema = resolve_schema(&raw.schema, &registry)?;
    Ok((registry, schema))
}

/// Declare components, validate the schema, then resolve the child tree.
pub fn resolve_document(raw: &RawDocument) -> Result<Document, LoadError> {
    let (registry, schema) = resolve_schema_only(raw)?;
    let children = resolve_optional(raw.children.as_ref(), &registry)?;

    log::debug!(
        "loaded document: {} components, {} slots",
        registry.len(),
        schema.len()
    );

    Ok(Document {
        registry,
        schema,
        children,
    })
}

pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Document, LoadError> {
    resolve_document(&parse_raw(text, format)?)
}

fn read_raw(path: &Path) -> Result<RawDocument, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_raw(&text, DocumentFormat::from_path(path))
}

pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    resolve_document(&read_raw(path)?)
}

/// Load only the component declarations and schema of a document.
pub fn load_schema(path: &Path) -> Result<(ComponentRegistry, SlotSchema), LoadError> {
    resolve_schema_only(&read_raw(path)?)
}
