use serde_json::{Map, Value};

use crate::component::component_model::{Component, ComponentId};

/// A child value as handed to a parent component.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// null / undefined placeholder
    Empty,
    Bool(bool),
    Text(String),
    Number(f64),
    Element(Element),
    Fragment(Fragment),
}

/// Kind tag of a node. Only `Element` is classifiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Empty,
    Bool,
    Text,
    Number,
    Element,
    Fragment,
}

/// Instance of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub component: ComponentId,
    pub key: Option<String>,
    pub props: Map<String, Value>,
    pub children: Children,
}

/// Grouping container with no rendering of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub children: Children,
}

/// The shapes a `children` value can take.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Children {
    #[default]
    Absent,
    One(Box<Node>),
    Many(Vec<Node>),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Empty => NodeKind::Empty,
            Node::Bool(_) => NodeKind::Bool,
            Node::Text(_) => NodeKind::Text,
            Node::Number(_) => NodeKind::Number,
            Node::Element(_) => NodeKind::Element,
            Node::Fragment(_) => NodeKind::Fragment,
        }
    }

    /// Identity of the producing component, for elements only.
    pub fn component(&self) -> Option<ComponentId> {
        match self {
            Node::Element(el) => Some(el.component),
            _ => None,
        }
    }

    pub fn element(component: impl Into<ComponentId>) -> Self {
        Node::Element(Element::new(component))
    }

    pub fn fragment(children: impl Into<Children>) -> Self {
        Node::Fragment(Fragment {
            children: children.into(),
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl Element {
    pub fn new(component: impl Into<ComponentId>) -> Self {
        Self {
            component: component.into(),
            key: None,
            props: Map::new(),
            children: Children::Absent,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: impl Into<Children>) -> Self {
        self.children = children.into();
        self
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&Component> for Node {
    fn from(component: &Component) -> Self {
        Node::element(component)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children::One(Box::new(node))
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Children::Many(nodes)
    }
}

impl From<Option<Node>> for Children {
    fn from(node: Option<Node>) -> Self {
        match node {
            Some(node) => Children::One(Box::new(node)),
            None => Children::Absent,
        }
    }
}

impl From<Element> for Children {
    fn from(el: Element) -> Self {
        Children::One(Box::new(Node::Element(el)))
    }
}
