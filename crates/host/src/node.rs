//! Renderable node snapshots.
//!
//! A `Node` is one materialized piece of render output. Nodes are replaced
//! wholesale on every render, never mutated in place.

use alloc::string::String;
use alloc::vec::Vec;
use brook_core::Props;

/// One materialized render output snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    /// Nothing rendered. The output of every instance before its node
    /// stream first emits.
    #[default]
    Empty,
    /// A text node.
    Text(String),
    /// An element with a tag, props, and children.
    Element {
        tag: String,
        props: Props,
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Creates an element node.
    pub fn element(tag: impl Into<String>, props: Props, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.into(),
            props,
            children,
        }
    }

    /// Returns true if this is the empty render.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Returns the element props, if this is an element.
    pub fn props(&self) -> Option<&Props> {
        match self {
            Node::Element { props, .. } => Some(props),
            _ => None,
        }
    }
}
