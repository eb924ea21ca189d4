use crate::node::node_model::{Children, Node};

/// Flat sequence view of any `children` value. No flattening of
/// fragments happens here.
pub fn normalize_children(children: Children) -> Vec<Node> {
    match children {
        Children::Absent => Vec::new(),
        Children::One(node) => vec![*node],
        Children::Many(nodes) => nodes,
    }
}

/// False for the placeholders a host framework renders as nothing:
/// null, `false`, the empty string, `0` and `NaN`.
pub fn is_renderable(node: &Node) -> bool {
    match node {
        Node::Empty => false,
        Node::Bool(b) => *b,
        Node::Text(s) => !s.is_empty(),
        Node::Number(n) => *n != 0.0 && !n.is_nan(),
        Node::Element(_) | Node::Fragment(_) => true,
    }
}

pub fn filter_renderable(nodes: Vec<Node>) -> Vec<Node> {
    nodes.into_iter().filter(is_renderable).collect()
}

/// Inline the children of top-level fragments, exactly one level deep.
///
/// A fragment found inside an inlined fragment is kept as an opaque
/// leaf: its own children are never looked at.
pub fn flatten_fragments(nodes: Vec<Node>) -> Vec<Node> {
    let mut flat = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Fragment(fragment) => {
                let inner = filter_renderable(normalize_children(fragment.children));
                flat.extend(inner);
            }
            other => flat.push(other),
        }
    }

    flat
}

/// Normalize, drop falsy placeholders, then inline one fragment level.
pub fn prepare_children(children: Children) -> Vec<Node> {
    flatten_fragments(filter_renderable(normalize_children(children)))
}
