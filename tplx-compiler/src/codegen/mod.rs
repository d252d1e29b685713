//! Code generation from a normalized tree.
//!
//! [`jsx_text`] emits JSX tag syntax; [`factory`] emits nested factory calls.
//! Both return the rendered root expression plus the statements that have
//! to precede it inside the generated function.

use std::borrow::Cow;

use crate::ast::{NameRef, Node};

pub mod factory;
pub mod jsx_text;

/// Joined attribute text longer than this is spread one entry per line in
/// pretty mode.
pub const ATTR_WRAP_THRESHOLD: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Generated {
    pub code: String,
    pub injected_code: String,
}

/// Bare text at the root is still rendered inside a fragment.
pub(crate) fn rooted(node: &Node) -> Cow<'_, Node> {
    match node {
        Node::Text(_) => Cow::Owned(Node::Element {
            name: NameRef::fragment(),
            attributes: Vec::new(),
            children: vec![node.clone()],
        }),
        _ => Cow::Borrowed(node),
    }
}
