use crate::component::registry::ComponentRegistry;
use crate::node::node_model::Node;
use crate::schema::schema_model::{SlotSchema, SlotSpec};
use crate::slots::slots_model::{Classification, SlotValue};

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a classification for terminal output.
///
/// Produces output like:
/// ```text
/// === Slots ===
///
/// header   Header
/// items    [Item, Item]
/// icons    (namespaced)
///
/// === Children (1) ===
///
///   Text "hello"
/// ```
pub fn format_console_report(
    classification: &Classification,
    schema: &SlotSchema,
    registry: &ComponentRegistry,
) -> String {
    let mut out = String::new();
    let width = schema.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    out.push_str("=== Slots ===\n\n");

    for (name, spec) in schema.iter() {
        let rendered = match (spec, classification.slot(name)) {
            (SlotSpec::Namespaced { .. }, _) => "(namespaced)".to_string(),
            (_, Some(SlotValue::One(node))) => describe(node, registry),
            (_, Some(SlotValue::Many(nodes))) => format!(
                "[{}]",
                nodes
                    .iter()
                    .map(|n| describe(n, registry))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            (_, None) => "-".to_string(),
        };
        out.push_str(&format!("{:width$}  {}\n", name, rendered, width = width));
    }

    out.push_str(&format!(
        "\n=== Children ({}) ===\n\n",
        classification.children.len()
    ));

    for node in &classification.children {
        out.push_str(&format!("  {}\n", describe(node, registry)));
    }

    out
}

/// One-line description of a node.
pub fn describe(node: &Node, registry: &ComponentRegistry) -> String {
    match node {
        Node::Empty => "null".to_string(),
        Node::Bool(b) => b.to_string(),
        Node::Number(n) => n.to_string(),
        Node::Text(s) => format!("Text {:?}", s),
        Node::Fragment(_) => "Fragment".to_string(),
        Node::Element(el) => match &el.key {
            Some(key) => format!("{} (key={})", registry.display(el.component), key),
            None => registry.display(el.component),
        },
    }
}

/// Format the slot → component table of a schema.
pub fn format_slot_table(schema: &SlotSchema, registry: &ComponentRegistry) -> String {
    let width = schema.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = String::new();

    for (name, spec) in schema.iter() {
        let mode = match spec {
            SlotSpec::Single(_) => "single".to_string(),
            SlotSpec::Repeatable(_) => "repeatable".to_string(),
            SlotSpec::Namespaced { label, .. } => format!("namespaced as {}", label),
        };
        out.push_str(&format!(
            "{:width$}  {}  ({})\n",
            name,
            registry.display(spec.component()),
            mode,
            width = width
        ));
    }

    out
}
