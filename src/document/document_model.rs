use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::component::registry::ComponentRegistry;
use crate::error::LoadError;
use crate::node::node_model::{Children, Element, Fragment, Node};
use crate::schema::raw::RawSlotSpec;
use crate::schema::schema_model::SlotSchema;

/// On-disk document: declared components, a slot schema and a child tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub components: Vec<String>,

    #[serde(default)]
    pub schema: BTreeMap<String, RawSlotSpec>,

    #[serde(default)]
    pub children: Option<RawChildren>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawChildren {
    Many(Vec<RawNode>),
    One(Box<RawNode>),
}

/// A child as written in a document.
///
/// Fragment and element maps reject keys of the other shape, so a map
/// carrying both `fragment` and `type` is a parse error rather than a
/// silently dropped element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    Fragment(RawFragment),
    Element(RawElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFragment {
    pub fragment: RawChildren,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawElement {
    #[serde(rename = "type")]
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<RawChildren>,
}

/// A loaded document with every name resolved to an identity.
#[derive(Debug, Clone)]
pub struct Document {
    pub registry: ComponentRegistry,
    pub schema: SlotSchema,
    pub children: Children,
}

impl RawNode {
    pub(crate) fn resolve(&self, registry: &ComponentRegistry) -> Result<Node, LoadError> {
        Ok(match self {
            RawNode::Empty => Node::Empty,
            RawNode::Bool(b) => Node::Bool(*b),
            RawNode::Number(n) => Node::Number(*n),
            RawNode::Text(s) => Node::Text(s.clone()),
            RawNode::Fragment(RawFragment { fragment }) => Node::Fragment(Fragment {
                children: fragment.resolve(registry)?,
            }),
            RawNode::Element(RawElement {
                component,
                key,
                props,
                children,
            }) => {
                let id = registry.lookup(component).ok_or_else(|| {
                    LoadError::UnknownComponent {
                        name: component.clone(),
                    }
                })?;
                Node::Element(Element {
                    component: id,
                    key: key.clone(),
                    props: props.clone(),
                    children: resolve_optional(children.as_ref(), registry)?,
                })
            }
        })
    }
}

impl RawChildren {
    pub(crate) fn resolve(
        &self,
        registry: &ComponentRegistry,
    ) -> Result<Children, LoadError> {
        match self {
            RawChildren::Many(nodes) => Ok(Children::Many(
                nodes
                    .iter()
                    .map(|n| n.resolve(registry))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            RawChildren::One(node) => Ok(Children::One(Box::new(node.resolve(registry)?))),
        }
    }
}

pub(crate) fn resolve_optional(
    children: Option<&RawChildren>,
    registry: &ComponentRegistry,
) -> Result<Children, LoadError> {
    match children {
        Some(children) => children.resolve(registry),
        None => Ok(Children::Absent),
    }
}
