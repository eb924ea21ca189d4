use slotting::{Component, Element, Node, SlotSchema};

/// Components and a schema shared by most tests:
/// `header` single, `items` repeatable, `icons` namespaced.
#[allow(dead_code)]
pub struct Kit {
    pub header: Component,
    pub item: Component,
    pub icon: Component,
    pub other: Component,
    pub schema: SlotSchema,
}

#[allow(dead_code)]
pub fn kit() -> Kit {
    let header = Component::new("Header");
    let item = Component::new("Item");
    let icon = Component::new("Icon");
    let other = Component::new("Other");

    let schema = SlotSchema::builder()
        .single("header", &header)
        .repeatable("items", &item)
        .namespaced("icons", "Icon", &icon)
        .build()
        .unwrap();

    Kit {
        header,
        item,
        icon,
        other,
        schema,
    }
}

#[allow(dead_code)]
pub fn keyed(component: &Component, key: &str) -> Node {
    Node::Element(Element::new(component).with_key(key))
}

#[allow(dead_code)]
pub fn key_of(node: &Node) -> Option<&str> {
    node.as_element().and_then(|el| el.key.as_deref())
}

#[allow(dead_code)]
pub fn keys(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().filter_map(key_of).collect()
}
