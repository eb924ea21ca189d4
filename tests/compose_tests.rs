use slotting::{Component, Element, Node, SlottedComponent, SlotSchema};

use crate::common::utils::keys;

mod common;

fn card() -> (SlottedComponent, Component, Component) {
    let title = Component::new("Title");
    let action = Component::new("Action");
    let schema = SlotSchema::builder()
        .single("title", &title)
        .repeatable("actions", &action)
        .build()
        .unwrap();

    (SlottedComponent::new(Component::new("Card"), schema), title, action)
}

#[test]
fn exposes_slot_identities_by_name() {
    let (card, title, action) = card();

    assert_eq!(card.slot("title"), Some(title.id()));
    assert_eq!(card.slot("actions"), Some(action.id()));
    assert_eq!(card.slot("missing"), None);
    assert_eq!(
        card.slots().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["actions", "title"]
    );
    assert_eq!(card.component().name(), "Card");
}

#[test]
fn children_built_from_exposed_identities_land_in_slots() {
    let (card, _, _) = card();
    let title_id = card.slot("title").unwrap();
    let action_id = card.slot("actions").unwrap();

    let props = card.props(vec![
        Node::Element(Element::new(action_id).with_key("save")),
        Node::text("body"),
        Node::Element(Element::new(title_id).with_key("t")),
        Node::Element(Element::new(action_id).with_key("cancel")),
    ]);

    assert_eq!(props.children, vec![Node::text("body")]);
    assert_eq!(
        keys(props.slots["actions"].as_many().unwrap()),
        vec!["save", "cancel"]
    );
    assert!(props.slots["title"].as_one().is_some());
}

#[test]
fn props_recomputed_per_call() {
    let (card, _, _) = card();
    let title_id = card.slot("title").unwrap();

    let with_title = card.props(Node::element(title_id));
    let without = card.props(Node::text("plain"));

    assert!(with_title.slots.contains_key("title"));
    assert!(!without.slots.contains_key("title"));
    assert_eq!(without.children.len(), 1);
}
