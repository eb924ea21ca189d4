use slotting::document::document_model::{RawElement, RawNode};
use slotting::document::loader::{DocumentFormat, parse_document};
use slotting::report::console::{format_console_report, format_slot_table};
use slotting::report::report_model::{ClassificationReport, SlotReport};
use slotting::classify;

const DOCUMENT: &str = r#"
components: [Title, Action, Icon]
schema:
  title: Title
  actions: [Action]
  icons: { Glyph: Icon }
children:
  - type: Action
    key: save
  - "hello"
  - type: Icon
"#;

// ============================================================================
// JSON report
// ============================================================================

#[test]
fn report_uses_component_names() {
    let doc = parse_document(DOCUMENT, DocumentFormat::Yaml).unwrap();
    let result = classify(doc.children, &doc.schema);

    let report = ClassificationReport::from_classification(&result, &doc.registry);

    assert_eq!(report.matched, 1);
    assert_eq!(report.leftover, 1);
    assert_eq!(report.children, vec![RawNode::Text("hello".into())]);
    match &report.slots["actions"] {
        SlotReport::Many(nodes) => match &nodes[0] {
            RawNode::Element(RawElement { component, key, .. }) => {
                assert_eq!(component, "Action");
                assert_eq!(key.as_deref(), Some("save"));
            }
            other => panic!("Expected element, got {:?}", other),
        },
        other => panic!("Expected list, got {:?}", other),
    }
    assert!(!report.slots.contains_key("title"));
}

#[test]
fn report_serializes_to_document_shape() {
    let doc = parse_document(DOCUMENT, DocumentFormat::Yaml).unwrap();
    let result = classify(doc.children, &doc.schema);
    let report = ClassificationReport::from_classification(&result, &doc.registry);

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["slots"]["actions"][0]["type"], "Action");
    assert_eq!(json["children"][0], "hello");
    assert!(json["slots"].get("icons").is_none());
}

// ============================================================================
// Console report
// ============================================================================

#[test]
fn console_report_lists_every_slot() {
    let doc = parse_document(DOCUMENT, DocumentFormat::Yaml).unwrap();
    let result = classify(doc.children, &doc.schema);

    let out = format_console_report(&result, &doc.schema, &doc.registry);

    assert!(out.contains("actions  [Action (key=save)]"), "got:\n{}", out);
    assert!(out.contains("icons    (namespaced)"));
    assert!(out.contains("title    -"));
    assert!(out.contains("=== Children (1) ==="));
    assert!(out.contains("Text \"hello\""));
}

#[test]
fn slot_table_shows_modes() {
    let doc = parse_document(DOCUMENT, DocumentFormat::Yaml).unwrap();

    let out = format_slot_table(&doc.schema, &doc.registry);

    assert!(out.contains("actions  Action  (repeatable)"), "got:\n{}", out);
    assert!(out.contains("icons    Icon  (namespaced as Glyph)"));
    assert!(out.contains("title    Title  (single)"));
}
