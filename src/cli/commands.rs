use std::path::Path;

use crate::cli::config::AppConfig;
use crate::document::loader::{load_document, load_schema};
use crate::report::console::{format_console_report, format_slot_table};
use crate::report::report_model::ClassificationReport;
use crate::slots::classifier::classify;

// ============================================================================
// classify subcommand
// ============================================================================

pub fn cmd_classify(
    document_path: &str,
    format: &str,
    output: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(Path::new(document_path))?;
    log::info!(
        "classifying {} against {} slots",
        document_path,
        document.schema.len()
    );

    let classification = classify(document.children, &document.schema);

    let output_content = match format {
        "json" => {
            let report = ClassificationReport::from_classification(&classification, &document.registry);
            let mut json = if config.output.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            json.push('\n');
            json
        }
        "console" => format_console_report(&classification, &document.schema, &document.registry),
        other => return Err(format!("unknown output format '{}'", other).into()),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(())
}

// ============================================================================
// check subcommand
// ============================================================================

/// Validate only the components and schema of a document; the child
/// tree is not resolved.
pub fn check_document(document_path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let (registry, schema) = load_schema(Path::new(document_path))?;
    let mut out = format!(
        "{}: ok ({} components, {} slots)\n",
        document_path,
        registry.len(),
        schema.len()
    );
    out.push_str(&format_slot_table(&schema, &registry));
    Ok(out)
}

pub fn cmd_check(document_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", check_document(document_path)?);
    Ok(())
}

// ============================================================================
// slots subcommand
// ============================================================================

pub fn cmd_slots(document_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (registry, schema) = load_schema(Path::new(document_path))?;
    print!("{}", format_slot_table(&schema, &registry));
    Ok(())
}
